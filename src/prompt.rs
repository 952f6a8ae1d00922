/// System-role instruction: the extension renders the answer inside a
/// container element, so the model must emit a bare HTML fragment.
pub const SYSTEM_PROMPT: &str = "You are a helpful shopping assistant that answers questions about products based on their descriptions and details.
Give the output as an HTML formatted response which can fit and render between <div> tags.";

/// The literal fallback sentence the model must return when the answer is
/// not derivable from the product information.
pub const NOT_AVAILABLE_SENTENCE: &str = "Information not available in the product description.";

/// Builds the user prompt embedding the (already normalized and truncated)
/// product context and the user's question.
pub fn build_user_prompt(
    platform: &str,
    product_title: &str,
    product_info: &str,
    query: &str,
    url: &str,
) -> String {
    let mut prompt = format!(
        "You are a helpful shopping assistant. A user is viewing a product and has a question about it.

Product Platform: {platform}
Product Title: {product_title}
Product Information: {product_info}

User Question: {query}

Answer the questions based on the product information available, and give the answer in concise points.
If the information is not available, respond with \"{NOT_AVAILABLE_SENTENCE}\"

Keep the answer length under 300 words.
"
    );

    // Provider-decided addendum: only suggested when the caller sent a URL,
    // and the model may leave it out entirely.
    if !url.is_empty() {
        prompt.push_str(&format!(
            "\nIf you can determine from the product information that this product is available cheaper elsewhere, append one final line noting that, citing {url}. Otherwise omit that line.\n"
        ));
    }

    prompt
}
