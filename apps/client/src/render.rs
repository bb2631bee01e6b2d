//! Plain-text rendering of the request state.
//!
//! The rendering contract: empty or absent experience/skills render as empty
//! sections, never as faults; missing job-entry fields render as empty text.
//! The one shape violation the renderer will not default around is a
//! completely absent contact object.

use thiserror::Error;

use crate::models::{RequestState, Resume};

/// Data-shape violation the renderer cannot default around. Distinct from a
/// fetch failure: the document arrived, just not in renderable form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("resume has no contact section")]
    MissingContact,
}

/// Renders a resume as plain text: header, contact line, then summary,
/// experience and skills sections.
pub fn render_resume(resume: &Resume) -> Result<String, RenderError> {
    let contact = resume.contact.as_ref().ok_or(RenderError::MissingContact)?;

    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", resume.name, resume.title));
    out.push_str(&format!(
        "{} | {} | {}\n",
        contact.email, contact.phone, contact.location
    ));

    section(&mut out, "PROFESSIONAL SUMMARY");
    out.push_str(&resume.summary);
    out.push('\n');

    section(&mut out, "EXPERIENCE");
    for job in &resume.experience {
        out.push_str(&format!("{}\n", job.role));
        out.push_str(&format!("{} ({})\n", job.company, job.duration));
        out.push_str(&format!("  * {}\n", job.description));
    }

    section(&mut out, "SKILLS & PROFICIENCIES");
    if !resume.skills.is_empty() {
        out.push_str(&resume.skills.join(", "));
        out.push('\n');
    }

    Ok(out)
}

/// Renders whatever the controller currently holds. Failed states show the
/// terminal fetch message verbatim plus guidance the user can act on; a
/// malformed loaded resume is reported as a data problem, not a fetch one.
pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => "Press Enter to generate a resume.".to_string(),
        RequestState::Loading => "Generating a new fictional persona...".to_string(),
        RequestState::Failed(message) => format!(
            "Error Loading Resume\n{message}\n\
             Check the resume service logs and make sure GEMINI_API_KEY is set correctly."
        ),
        RequestState::Loaded(resume) => match render_resume(resume) {
            Ok(text) => text,
            Err(err) => format!("Resume data is malformed: {err}. Regenerate to retry."),
        },
    }
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}
