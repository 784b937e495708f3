// Outbound delivery services
// Discord webhooks and the DeployHQ deploy trigger share one HTTP client.

pub mod deploy_trigger;
pub mod discord;
pub mod outbound;

pub use deploy_trigger::DeployTriggerService;
pub use discord::DiscordService;
pub use outbound::{DeliveryOutcome, DeliveryTarget};
