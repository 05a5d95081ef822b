use crate::knowledge::KNOWLEDGE_BASE;
use crate::models::ChatTurn;

// Fixed instruction block appended after the question
const INSTRUCTIONS: &str = r#"Instructions:
1. ANALYZE the conversation history to understand the context and what topic the user might be referring to.

2. If the user says things like "yes", "tell me more", "I want to know more", "more details", "continue", etc., look at the previous conversation to understand what they want more information about, then provide a DETAILED response (4-5 sentences) about that specific topic.

3. If it's a new question about Palak Desai, provide a SHORT, focused answer (2-3 sentences max) and ask a follow-up question.

4. After providing detailed information (when user asks for "more"), ask what other aspect they'd like to explore:
   - "What else would you like to know about this?"
   - "Are you curious about any other aspects of Palak's work?"
   - "Would you like to hear about her other projects/skills/experience?"

5. If the question is NOT about Palak Desai, politely decline and redirect them to ask about Palak instead.

6. Keep responses conversational, engaging, and contextually aware. Remember what you just talked about.

7. Use emojis sparingly but appropriately to make responses more engaging."#;

// Assemble the single prompt string: biography, trimmed history, question,
// instruction block. History is cut to the most recent `history_limit` turns
// here, before anything goes upstream.
pub fn build_prompt(history: &[ChatTurn], message: &str, history_limit: usize) -> String {
    let start = history.len().saturating_sub(history_limit);
    let recent = &history[start..];

    let mut context = String::new();
    if !recent.is_empty() {
        context.push_str("\n\nConversation History:\n");
        for turn in recent {
            let role = if turn.is_user { "User" } else { "Assistant" };
            context.push_str(&format!("{}: {}\n", role, turn.text));
        }
    }

    format!(
        "{KNOWLEDGE_BASE}{context}\n\nCurrent User Question: {message}\n\n{INSTRUCTIONS}\n\nAnswer:"
    )
}
