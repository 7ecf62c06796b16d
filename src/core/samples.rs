//! Built-in sample prompts offered as one-key fill-ins.
//! The catalog can be replaced through `[samples] prompts` in the config file.

pub const SAMPLE_PROMPTS: &[&str] = &[
    "Write a romantic comedy about two rival chefs.",
    "Create a thriller about a missing artifact.",
    "Generate a sci-fi story set on Mars.",
    "Write a drama about family secrets.",
    "Create a horror story in an abandoned hospital.",
];

pub fn default_samples() -> Vec<String> {
    SAMPLE_PROMPTS.iter().map(|s| s.to_string()).collect()
}
