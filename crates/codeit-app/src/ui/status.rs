use colored::Colorize;

pub fn status_label(online: bool) -> &'static str {
    if online {
        "Online"
    } else {
        "Offline"
    }
}

/// `● Service Online` in green, or `● Service Offline` in red
pub fn render_status(online: bool) -> String {
    let text = format!("● Service {}", status_label(online));
    if online {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
