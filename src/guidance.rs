//! Context-dependent help text shown in the panel and in probe toasts.

use crate::constants::TUNNEL_URL_EXAMPLE;
use crate::models::ExecutionContext;

pub fn environment_summary(context: ExecutionContext) -> &'static str {
    match context {
        ExecutionContext::Remote => {
            "You're running on a deployed site. Use ngrok to tunnel to your local Ollama instance."
        }
        ExecutionContext::Local => {
            "You're running locally. You can connect directly to localhost Ollama."
        }
    }
}

pub fn auto_detect_hint(context: ExecutionContext) -> &'static str {
    match context {
        ExecutionContext::Remote => "Automatically use ngrok URL based on environment",
        ExecutionContext::Local => "Automatically use localhost based on environment",
    }
}

/// Description for a probe that reached nothing usable.
pub fn connection_failed(context: ExecutionContext) -> &'static str {
    match context {
        ExecutionContext::Remote => "Could not connect to Ollama. Check your ngrok tunnel is running.",
        ExecutionContext::Local => {
            "Could not connect to Ollama. Make sure it's running with 'ollama serve'"
        }
    }
}

pub const CONNECTION_ERROR: &str = "Network error or CORS issue. Check console for details.";

pub fn setup_guide_title(context: ExecutionContext) -> &'static str {
    match context {
        ExecutionContext::Remote => "Production Setup Guide:",
        ExecutionContext::Local => "Development Setup Guide:",
    }
}

pub fn setup_steps(context: ExecutionContext) -> Vec<String> {
    match context {
        ExecutionContext::Remote => vec![
            "Install ngrok: `brew install ngrok` or download from ngrok.com".to_string(),
            "Start Ollama: `ollama serve`".to_string(),
            "Create tunnel: `ngrok http 11434`".to_string(),
            format!("Copy the HTTPS URL (e.g., {})", TUNNEL_URL_EXAMPLE),
            "Paste the URL above and test the connection".to_string(),
        ],
        ExecutionContext::Local => vec![
            "Ensure Ollama is running: `ollama serve`".to_string(),
            "Check if models are installed: `ollama list`".to_string(),
            "Verify the URL is correct (usually http://localhost:11434)".to_string(),
            "For CORS issues, restart Ollama and try again".to_string(),
        ],
    }
}

/// Short checklist next to the tunnel URL field.
pub const TUNNEL_STEPS: &[&str] = &[
    "Start ngrok tunnel: `ngrok http 11434`",
    "Copy the HTTPS URL from ngrok output",
    "Make sure Ollama is running: `ollama serve`",
];

pub fn missing_embedding_model(model: &str) -> String {
    format!(
        "{} is not installed on this Ollama instance. Run `ollama pull {}` before indexing documents.",
        model, model
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_matches_the_context() {
        assert!(connection_failed(ExecutionContext::Remote).contains("ngrok tunnel"));
        assert!(!connection_failed(ExecutionContext::Remote).contains("ollama serve"));
        assert!(connection_failed(ExecutionContext::Local).contains("ollama serve"));
    }

    #[test]
    fn remote_guide_walks_through_the_tunnel() {
        let steps = setup_steps(ExecutionContext::Remote);
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().any(|s| s.contains("ngrok http 11434")));
    }
}
