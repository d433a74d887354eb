// Shared prompt fragments. Each module that calls the model keeps its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// Instruction appended to every extraction prompt so the answer is parseable.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with a single JSON object only. \
Do not wrap it in markdown code fences. \
Do not add explanations before or after it. \
Use null for any field you cannot find.";
