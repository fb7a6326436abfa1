/// names of values used in interactions
pub mod value {
    pub const TICKER: &str = "ticker";
    pub const QUERY: &str = "query";
}

/// names of the bot's slash commands
pub mod commands {
    pub const PING: &str = "ping";
    pub const ANALYZE: &str = "analyze";
    pub const ASK: &str = "ask";
}

/// required environment variables
pub mod env {
    pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const FULL_PROMPT: &str = "FULL_PROMPT";
}

/// fixed sampling parameters for completion requests
pub mod generation {
    pub const MODEL: &str = "gpt-4o-mini";
    pub const TEMPERATURE: f32 = 0.2;
    pub const MAX_OUTPUT_TOKENS: u32 = 600;
}
