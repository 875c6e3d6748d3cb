//! Prompt construction from a query and its retrieved context.

/// Interpolates the query and retrieved context into the fixed instructional
/// template sent to the completion model.
///
/// Pure function: identical inputs always produce byte-identical output.
/// No validation is performed; any strings are accepted, including the
/// no-context sentinel.
pub fn augmented_prompt(query: &str, context: &str) -> String {
    format!(
        "Given the context below answer the question.\n\
         \n\
         Question: {query}\n\
         \n\
         Context: {context}\n\
         \n\
         Remember to answer only based on the context provided and not from any other source.\n\
         \n\
         If the question cannot be answered based on the provided context, say I don't know."
    )
}
