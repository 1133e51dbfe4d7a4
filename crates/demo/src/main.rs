use anyhow::Context;

use ledgerbook_infra::{FileStore, StoreConfig};

fn main() -> anyhow::Result<()> {
    ledgerbook_observability::init();

    let config = StoreConfig::from_env()?;
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create {}", config.data_dir.display()))?;
    let store = FileStore::from_config(&config);

    println!("Dumping to json");
    let saved = ledgerbook_demo::save_walkthrough(&store)?;
    println!(
        "The content of {} is",
        saved
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    println!("{}", saved.contents);

    let interest = ledgerbook_demo::interest_walkthrough()?;
    println!("{} (born {})", interest.owner, interest.birthdate);
    println!("{}", ledgerbook_demo::format_balance(interest.balance_after_deposit));
    println!("{}", ledgerbook_demo::format_balance(interest.balance_after_interest));

    Ok(())
}
