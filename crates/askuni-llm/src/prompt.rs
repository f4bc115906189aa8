//! Prompt composition.
//!
//! Two instruction sets exist: a short one for relayed prompts and a longer
//! one for questions asked against the documents loaded at start-up.

/// Compose the request text for a relayed prompt.
///
/// The university summary comes before the knowledge base so the
/// instructions can refer to both by their section names.
#[must_use]
pub fn compose_prompt(summary: &str, knowledge_base: &str, question: &str) -> String {
    format!(
        "You are a helpful university assistant chatbot.

UNIVERSITY CONTEXT:
{summary}

KNOWLEDGE BASE:
{knowledge_base}

INSTRUCTIONS:
0. Output in clean structured Markdown with headings, bullets, lists.
1. First answer using KNOWLEDGE BASE.
2. If info missing, use UNIVERSITY CONTEXT.
3. If still not found, say you don't know.
4. Keep answers friendly & precise.
5. Prefer bullet points always.
User Question: {question}
",
        summary = summary.trim(),
        knowledge_base = knowledge_base.trim(),
        question = question.trim(),
    )
}

/// Compose the request text for a question from the chat page or CLI.
#[must_use]
pub fn compose_question_prompt(summary: &str, knowledge_base: &str, question: &str) -> String {
    format!(
        "You are a helpful university assistant chatbot. Your role is to answer questions about the university using the provided knowledge base.

UNIVERSITY CONTEXT:
{summary}

KNOWLEDGE BASE:
{knowledge_base}

INSTRUCTIONS:
0. (Important) a) give the response in structured markdown text, b) use proper indentation and newlines, c) add bullet points when needed
1. First, check if the answer is available in the KNOWLEDGE BASE above
2. If the information is in the knowledge base, use it to answer the question accurately
3. If the information is NOT in the knowledge base, use the UNIVERSITY CONTEXT to provide a relevant answer
4. Always maintain the context that you're answering about this specific university
5. Be friendly, professional, and concise
6. If you truly don't know something even with the context, politely say so and offer to help with something else
7. Give answers as bullet points or lists when it fits, for example a list of courses
8. (Priority) Prefer bullet points
User Question: {question}

Please provide a helpful answer:",
        summary = summary.trim(),
        knowledge_base = knowledge_base.trim(),
        question = question.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let prompt = compose_prompt("SUMMARY", "KB", "When are exams?");
        let context = prompt.find("UNIVERSITY CONTEXT:\nSUMMARY").unwrap();
        let kb = prompt.find("KNOWLEDGE BASE:\nKB").unwrap();
        let instructions = prompt.find("INSTRUCTIONS:").unwrap();
        let question = prompt.find("User Question: When are exams?").unwrap();
        assert!(context < kb && kb < instructions && instructions < question);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let prompt = compose_prompt("  s\n\n", "\nk ", "  q?  ");
        assert!(prompt.contains("UNIVERSITY CONTEXT:\ns\n\nKNOWLEDGE BASE:\nk\n\n"));
        assert!(prompt.ends_with("User Question: q?\n"));
    }

    #[test]
    fn test_question_prompt_has_full_instructions() {
        let prompt = compose_question_prompt("SUMMARY", "KB", " Library hours? ");
        let kb = prompt.find("KNOWLEDGE BASE:\nKB").unwrap();
        let last_rule = prompt.find("8. (Priority) Prefer bullet points").unwrap();
        assert!(kb < last_rule);
        assert!(prompt.ends_with("User Question: Library hours?\n\nPlease provide a helpful answer:"));
        assert_ne!(prompt, compose_prompt("SUMMARY", "KB", "Library hours?"));
    }
}
