use crate::outcome::Outcome;
use crate::payload::{CommandEntry, NotificationPayload};

/// The two body parts of one notification email.
#[derive(Debug, Clone)]
pub struct RenderedBody {
    pub html: String,
    pub text: String,
}

/// Render a payload into its HTML and plain-text bodies. Both parts carry the
/// same content: the outcome sentence, the `Commit <revision>` line, every
/// command verbatim (except for infrastructure failures, which list nothing),
/// and the build-report link.
pub fn render(payload: &NotificationPayload) -> RenderedBody {
    RenderedBody {
        html: render_html(payload),
        text: render_text(payload),
    }
}

fn outcome_sentence(payload: &NotificationPayload) -> String {
    match payload.outcome {
        Outcome::Success => "Your build has passed all its tests!".to_string(),
        Outcome::Failed => "Your build has failed its tests!".to_string(),
        Outcome::NoTests => {
            "Your build did not run any tests, because it has no test commands!".to_string()
        }
        Outcome::TimedOut => {
            "Your build timed out during testing, after 20 minutes without output.".to_string()
        }
        Outcome::InfrastructureFailure => format!(
            "There was a bug in Circle's infrastructure that led to a problem testing \
             commit {}. We have been notified and will fix the problem as soon as possible.",
            payload.revision
        ),
    }
}

fn successful_banner(outcome: Outcome) -> &'static str {
    if outcome == Outcome::Success {
        "These commands were run, and were all successful:"
    } else {
        "The rest of your commands were successful:"
    }
}

fn render_text(payload: &NotificationPayload) -> String {
    let mut text = String::new();

    text.push_str(&outcome_sentence(payload));
    text.push_str("\n\n");
    text.push_str(&format!("Commit {}\n", payload.revision));

    if payload.outcome != Outcome::InfrastructureFailure {
        let (successful, failing): (Vec<&CommandEntry>, Vec<&CommandEntry>) =
            payload.entries.iter().partition(|e| e.succeeded());

        if !successful.is_empty() {
            text.push('\n');
            text.push_str(successful_banner(payload.outcome));
            text.push_str("\n\n");
            for entry in &successful {
                text.push_str(&format!("  $ {}\n", entry.command));
            }
        }

        if !failing.is_empty() {
            text.push_str("\nThese commands failed:\n");
            for entry in &failing {
                text.push_str(&format!("\n  $ {}\n", entry.command));
                text.push_str(&format!("\nOutput:\n{}\n", entry.output));
                if let Some(code) = entry.exit_code {
                    text.push_str(&format!("\nExit code: {code}\n"));
                }
            }
        }
    }

    text.push_str(&format!(
        "\nRead the full build report: {}\n",
        payload.report_url
    ));

    text
}

fn render_html(payload: &NotificationPayload) -> String {
    let mut html = String::new();

    html.push_str("<html>\n<body>\n");
    html.push_str(&format!("<p>{}</p>\n", escape(&outcome_sentence(payload))));
    html.push_str(&format!("<p>Commit {}</p>\n", escape(&payload.revision)));

    if payload.outcome != Outcome::InfrastructureFailure {
        let (successful, failing): (Vec<&CommandEntry>, Vec<&CommandEntry>) =
            payload.entries.iter().partition(|e| e.succeeded());

        if !successful.is_empty() {
            html.push_str(&format!("<p>{}</p>\n<ul>\n", successful_banner(payload.outcome)));
            for entry in &successful {
                html.push_str(&format!("<li><code>{}</code></li>\n", escape(&entry.command)));
            }
            html.push_str("</ul>\n");
        }

        if !failing.is_empty() {
            html.push_str("<p>These commands failed:</p>\n");
            for entry in &failing {
                html.push_str(&format!("<p><code>{}</code></p>\n", escape(&entry.command)));
                html.push_str(&format!("<p>Output:</p>\n<pre>{}</pre>\n", escape(&entry.output)));
                if let Some(code) = entry.exit_code {
                    html.push_str(&format!("<p>Exit code: {code}</p>\n"));
                }
            }
        }
    }

    html.push_str(&format!(
        "<p><a href=\"{}\">Read the full build report</a></p>\n",
        escape(&payload.report_url)
    ));
    html.push_str("</body>\n</html>\n");

    html
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
