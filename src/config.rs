use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-gateway")]
#[command(about = "Chat gateway for the portfolio site")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Base URL of the generative-model API
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub gemini_url: String,

    // Model to request
    #[arg(long, default_value = "gemini-1.5-flash")]
    pub model: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 20)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,

    // How many prior conversation turns to keep in the prompt
    #[arg(long, default_value_t = 6)]
    pub history_limit: usize,

    // Output token cap for the model call
    #[arg(long, default_value_t = 512)]
    pub max_output_tokens: u32,

    // Interval for evicting expired rate-limit entries, in seconds
    #[arg(long, default_value_t = 600)]
    pub sweep_interval: u64,
}
