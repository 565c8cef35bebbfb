/// Drop markdown code fence markers from model output.
///
/// Models asked for "plain JSON" still like to wrap it in ```json fences,
/// anywhere in the text. Every marker is removed, not just a leading one.
pub fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
