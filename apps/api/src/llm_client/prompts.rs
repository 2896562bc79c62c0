// Shared prompt fragments.
// Each feature module defines its own prompts.rs alongside it; this file
// holds the cross-cutting pieces they splice in.

/// Instruction appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
