//! Fixed inputs to the completion provider.

/// System instruction sent ahead of every user prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a Blender Python assistant. Convert the user prompt \
into a safe Python script that manipulates the active scene. Do not import os, subprocess, or \
perform network calls.";

/// Completion model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Output cap (in tokens) used when none is configured.
pub const DEFAULT_MAX_TOKENS: u32 = 300;
