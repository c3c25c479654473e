use serde::{Deserialize, Serialize};

use drop_accept::AcceptFilter;

/// Recognized configuration of a drop area
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropAreaOptions {
    /// Filters which candidates the area takes; empty accepts anything
    pub accept: AcceptFilter,
    /// Whether the area takes more than one file at a time
    pub multiple: bool,
    /// A disabled area rejects every interaction
    pub disabled: bool,
    /// Whether clicking the area should open the native file chooser
    pub clickable: bool,
}

impl DropAreaOptions {
    /// Options with the given accept filter and everything else default
    pub fn accepting(accept: Option<&str>) -> Self {
        DropAreaOptions {
            accept: AcceptFilter::parse(accept),
            ..Default::default()
        }
    }
}
