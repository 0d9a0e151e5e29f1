use colored::Colorize;

const BADGE: &str = "CodeIT Institute of Nepal";
const TITLE: &str = "CodeIT AI Assistant";
const TAGLINE: &str = "Ask about courses, mentors, admissions, and everything CodeIT.";

/// Static banner printed once at startup
pub fn render_header() -> String {
    format!(
        "{}\n{}\n{}\n",
        format!("[ {} ]", BADGE).bright_black(),
        format!("🤖 {}", TITLE).bright_cyan().bold(),
        TAGLINE.bright_black()
    )
}
