mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TOKEN;

fn new_talker() -> Value {
    json!({
        "name": "Danielle Santos",
        "age": 56,
        "talk": { "watchedAt": "22/10/2019", "rate": 5 }
    })
}

#[tokio::test]
async fn root_is_liveness_probe() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.bytes().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn list_and_get() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/talker")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, common::seed());

    let res = server.client.get(server.url("/talker/1")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, common::seed()[0]);

    let res = server.client.get(server.url("/talker/42")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "message": "Pessoa palestrante não encontrada" })
    );

    Ok(())
}

#[tokio::test]
async fn create_update_delete_roundtrip() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let client = &server.client;

    let res = client
        .post(server.url("/talker"))
        .header("authorization", TOKEN)
        .json(&new_talker())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().expect("id should be an integer");

    let res = client.get(server.url(&format!("/talker/{}", id))).send().await?;
    let mut expected = new_talker();
    expected["id"] = json!(id);
    assert_eq!(res.json::<Value>().await?, expected);

    let mut update = new_talker();
    update["name"] = json!("Danielle Souza");
    update["talk"]["rate"] = json!(3);
    let res = client
        .put(server.url(&format!("/talker/{}", id)))
        .header("authorization", TOKEN)
        .json(&update)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["name"], "Danielle Souza");
    assert_eq!(updated["talk"]["rate"], 3);

    let res = client
        .delete(server.url(&format!("/talker/{}", id)))
        .header("authorization", TOKEN)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(server.url(&format!("/talker/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // File reflects the final state
    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(server.data_file())?)?;
    assert_eq!(on_disk, common::seed());

    Ok(())
}

#[tokio::test]
async fn authorization_shape_check() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.post(server.url("/talker")).json(&new_talker()).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?["message"], "Token não encontrado");

    for token in ["123456789012345", "12345678901234567"] {
        let res = server
            .client
            .post(server.url("/talker"))
            .header("authorization", token)
            .json(&new_talker())
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.json::<Value>().await?["message"], "Token inválido");
    }

    Ok(())
}

#[tokio::test]
async fn concurrent_creates_keep_every_record() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let mut requests = Vec::new();
    for i in 0..10 {
        let client = server.client.clone();
        let url = server.url("/talker");
        let mut body = new_talker();
        body["name"] = json!(format!("Talker número {}", i));
        requests.push(tokio::spawn(async move {
            client.post(url).header("authorization", TOKEN).json(&body).send().await
        }));
    }
    for request in requests {
        assert_eq!(request.await??.status(), StatusCode::CREATED);
    }

    let all = server.client.get(server.url("/talker")).send().await?.json::<Value>().await?;
    let ids: Vec<i64> = all
        .as_array()
        .expect("collection should be an array")
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect();
    assert_eq!(ids.len(), 14);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 14);

    Ok(())
}
