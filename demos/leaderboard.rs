use capped_set::{Address, AddressSet, CappedSetConfig, SharedCappedSet, logging::init_logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let config = CappedSetConfig::from_json_str(r#"{ "capacity": 5, "log_level": "debug" }"#)?;
    init_logger(&config.log_level);

    let set: AddressSet = config.build()?;
    let leaderboard = SharedCappedSet::from(set);
    let players: Vec<Address> = (0..6).map(|_| Address::new_random()).collect();

    for (player, score) in players.iter().zip([15, 15, 6, 3, 4]) {
        leaderboard.insert(*player, score).await;
    }

    if let Some((evicted, score)) = leaderboard.insert(players[5], 2).await {
        println!("Evicted {} (score {})", evicted, score);
    }

    leaderboard.insert(players[4], 8).await;
    leaderboard.remove(&players[5]).await?;

    for player in &players {
        match leaderboard.get_value(player).await {
            Ok(score) => println!("{}: {}", player, score),
            Err(e) => println!("{}: {}", player, e),
        }
    }

    if let Some((player, score)) = leaderboard.min().await {
        println!("Next to go: {} (score {})", player, score);
    }

    Ok(())
}
