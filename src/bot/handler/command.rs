//! Slash command interaction handler.
//!
//! Answers command interactions for names present in the catalog. Replies are plain
//! text; anything richer belongs to a dedicated handler.

use serenity::all::{
    CommandDataOption, CommandDataOptionValue, CommandInteraction, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage, EventHandler, Interaction,
};
use serenity::async_trait;

use crate::bot::catalog;
use crate::model::command::CommandDefinition;

/// Dispatches command interactions against a fixed catalog.
pub struct SlashCommandHandler {
    catalog: &'static [CommandDefinition],
}

impl SlashCommandHandler {
    pub fn new(catalog: &'static [CommandDefinition]) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl EventHandler for SlashCommandHandler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            handle_command(&ctx, self.catalog, command).await;
        }
    }
}

/// Replies to a single command interaction.
///
/// Unknown command names are logged and left unanswered; Discord shows its own
/// "application did not respond" notice in that case.
pub async fn handle_command(
    ctx: &Context,
    catalog: &[CommandDefinition],
    command: CommandInteraction,
) {
    let Some(definition) = catalog::find(catalog, &command.data.name) else {
        tracing::warn!(
            "Received interaction for unknown command /{}",
            command.data.name
        );
        return;
    };

    let arguments = string_arguments(&command.data.options);
    let message = CreateInteractionResponseMessage::new().content(reply_for(&definition, &arguments));

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", definition.name, e);
    }
}

/// Collects the string-valued arguments of an interaction as (name, value) pairs.
pub fn string_arguments(options: &[CommandDataOption]) -> Vec<(String, String)> {
    options
        .iter()
        .filter_map(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some((option.name.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

/// Builds the text reply for a command.
///
/// `ping` answers "Pong!". Every other command echoes its supplied arguments in the
/// order the options are declared; optional arguments that were not given are left out.
pub fn reply_for(definition: &CommandDefinition, arguments: &[(String, String)]) -> String {
    if definition.name == "ping" {
        return "Pong!".to_string();
    }

    let mut reply = format!("**/{}**", definition.name);

    for option in definition.options {
        let value = arguments
            .iter()
            .find(|(name, _)| name == option.name)
            .map(|(_, value)| value.as_str());

        if let Some(value) = value {
            reply.push_str(&format!("\n{}: {}", option.name, value));
        }
    }

    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::catalog::CATALOG;

    fn args(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn ping_replies_pong() {
        let ping = catalog::find(CATALOG, "ping").unwrap();

        assert_eq!(reply_for(&ping, &[]), "Pong!");
    }

    #[test]
    fn echoes_arguments_in_declared_order() {
        let ask = catalog::find(CATALOG, "ask").unwrap();

        let reply = reply_for(
            &ask,
            &args(&[("topic", "rust"), ("question", "what is a lifetime?")]),
        );

        assert_eq!(reply, "**/ask**\nquestion: what is a lifetime?\ntopic: rust");
    }

    #[test]
    fn omits_absent_optional_arguments() {
        let ask = catalog::find(CATALOG, "ask").unwrap();

        let reply = reply_for(&ask, &args(&[("question", "why?")]));

        assert_eq!(reply, "**/ask**\nquestion: why?");
    }

    #[test]
    fn ignores_undeclared_arguments() {
        let docs = catalog::find(CATALOG, "docs").unwrap();

        let reply = reply_for(&docs, &args(&[("query", "signals"), ("extra", "x")]));

        assert_eq!(reply, "**/docs**\nquery: signals");
    }
}
