use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tagforge_events::Event;
use tagforge_products::ProductField;

use crate::view_model::ViewModel;

/// What triggered a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeCause {
    FieldEdited { field: ProductField },
    Reset,
    IdentifierRegenerated,
}

/// Event: the preview was recomputed.
///
/// Carries a full copy of the new view model, so subscribers never need to read
/// back from the synchronizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewUpdated {
    pub revision: u64,
    pub cause: ChangeCause,
    pub view: ViewModel,
    pub occurred_at: DateTime<Utc>,
}

impl Event for PreviewUpdated {
    fn event_type(&self) -> &'static str {
        "preview.view_model.updated"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
