use payloads::{Agent, AgentId, requests};
use uuid::Uuid;

use crate::helpers::{MockBackend, spawn_app_with};

#[tokio::test]
async fn toggle_agent_enabled() -> anyhow::Result<()> {
    let agent = Agent {
        id: AgentId(Uuid::new_v4()),
        name: "gateway-01".to_string(),
        is_enabled: true,
        last_seen_at: Some("2026-01-01T00:00:00Z".parse()?),
    };
    let app = spawn_app_with(MockBackend {
        agents: vec![agent.clone()],
        ..Default::default()
    })
    .await;

    let agents = app.client.list_agents().await?;
    assert_eq!(agents, vec![agent.clone()]);

    let updated = app
        .client
        .update_agent(&agent.id, &requests::UpdateAgent { is_enabled: false })
        .await?;
    assert!(!updated.is_enabled);
    assert_eq!(updated.last_seen_at, agent.last_seen_at);

    Ok(())
}
