// Prompt constants for the one-shot `ask` binary. The dataset tools never call
// the LLM; this pair is the whole conversational surface.

/// System prompt for the demo chat call.
pub const ASK_SYSTEM: &str = "Help to answer my queries in a clear and concise way.";

/// User prompt for the demo chat call.
pub const ASK_USER: &str = "Explain the importance of large language models.";
