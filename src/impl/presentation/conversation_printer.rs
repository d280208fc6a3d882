use crate::entities::{Conversation, Sender};

pub(crate) struct ConversationPrinter {
    width: usize,
}

impl ConversationPrinter {
    pub(crate) fn new(width: usize) -> Self {
        Self { width }
    }

    pub(crate) fn print_conversation(&self, conversation: &Conversation) -> String {
        let mut output = String::new();
        for message in conversation.messages() {
            let speaker = match message.sender {
                Sender::User => "You",
                Sender::Assistant => "Assistant",
            };
            output.push_str(&format!("{}:\n", speaker));
            // A reply that has not streamed in yet.
            let text = if message.text.is_empty() {
                "..."
            } else {
                message.text.as_str()
            };
            let prefix = "    ";
            let options = textwrap::Options::new(self.width.saturating_sub(prefix.len()))
                .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
            for paragraph in text.lines() {
                if paragraph.trim().is_empty() {
                    output.push('\n');
                    continue;
                }
                for line in textwrap::wrap(paragraph, &options) {
                    output.push_str(&format!("{}{}\n", prefix, line));
                }
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ChatMessage;

    #[test]
    fn wraps_messages_under_speaker_labels() {
        let conversation = Conversation::greeted("Hello there")
            .with_message(ChatMessage::user("Which cheques bounced this month and who issued them?"))
            .with_message(ChatMessage::assistant(""));

        let transcript = ConversationPrinter::new(28).print_conversation(&conversation);

        assert_eq!(
            transcript,
            "Assistant:\n    Hello there\n\n\
             You:\n    Which cheques bounced\n    this month and who\n    issued them?\n\n\
             Assistant:\n    ...\n\n"
        );
    }
}
