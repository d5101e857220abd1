//! Upload name generation.
//!
//! Names must stay unique across concurrent submissions that share the same
//! human-entered team name: sanitized base + slot label + millisecond
//! timestamp + random token.

use rand::distr::Alphanumeric;
use rand::Rng;

const TOKEN_LEN: usize = 6;

/// Generate a collision-resistant storage name.
///
/// `base` is the human-entered team or participant name (used only for
/// readability), `label` the logical slot (e.g. `payment-proof`).
pub fn unique_file_name(base: &str, label: &str, extension: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();

    format!(
        "{}_{}_{}-{}.{}",
        sanitize(base),
        label,
        timestamp,
        token,
        extension
    )
}

/// File extension for the MIME types the gatekeeper admits.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type.to_ascii_lowercase().as_str() {
        "application/pdf" => "pdf",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
        _ => "bin",
    }
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "submission".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_calls_never_collide() {
        let a = unique_file_name("Bridgeworks", "payment-proof", "pdf");
        let b = unique_file_name("Bridgeworks", "payment-proof", "pdf");
        assert_ne!(a, b);
    }

    #[test]
    fn name_carries_base_label_and_extension() {
        let name = unique_file_name("Team Alpha", "id-scan", "pdf");
        assert!(name.starts_with("Team_Alpha_id-scan_"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn awkward_bases_are_sanitized() {
        let name = unique_file_name("  jembatan / keren  ", "promo", "pdf");
        assert!(!name.contains('/'));
        assert!(!name.contains(' '));

        let fallback = unique_file_name("   ", "promo", "pdf");
        assert!(fallback.starts_with("submission_promo_"));
    }

    #[test]
    fn extensions_follow_admitted_mime_types() {
        assert_eq!(extension_for("application/pdf"), "pdf");
        assert_eq!(extension_for("Application/PDF"), "pdf");
        assert_eq!(
            extension_for(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            "xlsx"
        );
        assert_eq!(extension_for("image/png"), "bin");
    }
}
