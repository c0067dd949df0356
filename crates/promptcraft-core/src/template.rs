//! Placeholder text rendering for the simulated generator.

use crate::content::{ContentType, Tone};
use crate::generator::GenerationRequest;

const BODY_OPENING: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.";

const BODY_MIDDLE: &str = "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const BODY_CLOSING: &str = "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis.";

/// Build the placeholder text for a content type, tone and prompt.
///
/// Pure and deterministic: the prompt is quoted verbatim in the first line,
/// and the only per-type variation comes from the fragments in the content
/// type table.
pub fn render(content_type: ContentType, tone: Tone, prompt: &str) -> String {
    let kind = content_type.info();

    format!(
        "Here's your {} {} about \"{}\":\n\n{}{}\n\n{}{}\n\n{}{}\n\n{}",
        tone.descriptor(),
        kind.value,
        prompt,
        kind.lead,
        BODY_OPENING,
        kind.heading,
        BODY_MIDDLE,
        kind.scene,
        BODY_CLOSING,
        kind.tags,
    )
}

/// Render a validated request.
pub fn render_request(request: &GenerationRequest) -> String {
    render(request.content_type(), request.tone(), request.prompt())
}
