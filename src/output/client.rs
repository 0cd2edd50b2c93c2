//! Client configuration output

use std::path::Path;

use crate::store::LocalConfig;

/// Mask a secret for display: show last 4 chars or "<not set>"
pub fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if s.chars().count() >= 4 => {
            let tail: String = s.chars().skip(s.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}

/// Print the effective client configuration with secrets masked
pub fn output_client_config(config: &LocalConfig, path: &Path) {
    println!("Preferences: {}", path.display());
    println!("  Endpoint:    {}", config.effective_endpoint());
    println!(
        "  Project:     {}",
        config.project.as_deref().unwrap_or("<not set>")
    );
    println!("  Key:         {}", mask_secret(config.key.as_deref()));
    println!("  Self-signed: {}", config.self_signed);

    match (config.current.as_deref(), config.current_session()) {
        (Some(id), Some(session)) => {
            println!("  Session:     {} ({})", id, session.endpoint);
            if let Some(email) = &session.email {
                println!("  Email:       {}", email);
            }
            println!("  Cookie:      {}", mask_secret(Some(&session.cookie)));
        }
        _ => println!("  Session:     <none>"),
    }
}
