//! Marking remote events that disappeared from the schedule file.

use crate::event::RemoteEvent;
use crate::record::ColorTag;

pub const NOT_IN_SOURCE_MARKER: &str = "**event not in source file**\n";

/// Return `event` recolored for attention with a warning line on top of its
/// description. All other fields are left as fetched.
pub fn flag_event(mut event: RemoteEvent) -> RemoteEvent {
    let description = event.description.take().unwrap_or_default();
    event.color_id = Some(ColorTag::Attention.as_str().to_string());
    event.description = Some(format!("{NOT_IN_SOURCE_MARKER} {description}"));
    event
}
