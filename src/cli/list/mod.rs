//! List command - prints the stored profiles

use clap::Args;

use super::{load_config, StorageArgs};

/// Arguments for `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Print every stored profile as a pretty JSON array
pub async fn run(args: ListArgs) -> anyhow::Result<()> {
    let mut config = load_config();
    args.storage.apply(&mut config);

    let state = crate::create_app_state_with_config(&config)?;
    let users = state.user_service.list().await?;

    println!("{}", serde_json::to_string_pretty(&users)?);

    Ok(())
}
