// Testes de integração contra um Postgres real: cada teste recebe um banco
// recém-criado pelo sqlx com as migrações aplicadas. Aqui moram as
// propriedades que dependem do banco: posse entre empresas, janela de
// horário gravada, filtros de listagem e disponibilidade.

use agenda_backend::{config::AppState, routes::build_router};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn app(pool: PgPool) -> Router {
    build_router(AppState::with_pool(pool))
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn id_of(body: &Value) -> Uuid {
    body["id"].as_str().unwrap().parse().unwrap()
}

fn timestamp_of(body: &Value, field: &str) -> DateTime<Utc> {
    body[field].as_str().unwrap().parse().unwrap()
}

async fn seed_company(app: &Router, trade_name: &str) -> Uuid {
    let (status, body) = request(
        app,
        Method::POST,
        "/companies",
        Some(json!({ "name": format!("{trade_name} LTDA"), "trade_name": trade_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

async fn seed_professional(app: &Router, company_id: Uuid, name: &str) -> Uuid {
    let (status, body) = request(
        app,
        Method::POST,
        &format!("/companies/{company_id}/professionals"),
        Some(json!({ "name": name, "role": "Barbeiro" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

async fn seed_service(app: &Router, company_id: Uuid, name: &str, duration_minutes: i32) -> Uuid {
    let (status, body) = request(
        app,
        Method::POST,
        &format!("/companies/{company_id}/services"),
        Some(json!({ "name": name, "duration_minutes": duration_minutes })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

async fn seed_client(app: &Router, company_id: Uuid) -> Uuid {
    let (status, body) = request(
        app,
        Method::POST,
        &format!("/companies/{company_id}/clients"),
        Some(json!({ "name": "Maria da Silva", "phone": "11999990000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

struct Agenda {
    company_id: Uuid,
    professional_id: Uuid,
    service_id: Uuid,
    client_id: Uuid,
}

// Uma empresa completa: profissional, serviço de 60 minutos e cliente.
async fn seed_agenda(app: &Router) -> Agenda {
    let company_id = seed_company(app, "Barbearia Central").await;
    Agenda {
        company_id,
        professional_id: seed_professional(app, company_id, "João Pereira").await,
        service_id: seed_service(app, company_id, "Corte masculino", 60).await,
        client_id: seed_client(app, company_id).await,
    }
}

async fn seed_appointment(app: &Router, agenda: &Agenda, start_time: &str) -> Value {
    let (status, body) = request(
        app,
        Method::POST,
        &format!("/companies/{}/appointments", agenda.company_id),
        Some(json!({
            "client_id": agenda.client_id,
            "professional_id": agenda.professional_id,
            "service_id": agenda.service_id,
            "start_time": start_time,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[sqlx::test(migrations = "./migrations")]
async fn criacao_calcula_janela_e_forca_pending(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;

    // status e end_time do corpo não valem nada: o servidor decide os dois.
    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/companies/{}/appointments", agenda.company_id),
        Some(json!({
            "client_id": agenda.client_id,
            "professional_id": agenda.professional_id,
            "service_id": agenda.service_id,
            "start_time": "2024-01-10T09:00:00Z",
            "status": "completed",
            "end_time": "2024-01-10T23:59:00Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["date"], "2024-01-10");
    assert_eq!(
        timestamp_of(&body, "end_time"),
        "2024-01-10T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );

    // A resposta já vem desnormalizada com os dados das três referências.
    assert_eq!(body["client_name"], "Maria da Silva");
    assert_eq!(body["professional_role"], "Barbeiro");
    assert_eq!(body["service_duration_minutes"], 60);
}

#[sqlx::test(migrations = "./migrations")]
async fn criacao_com_profissional_de_outra_empresa_nao_grava_nada(pool: PgPool) {
    let app = app(pool.clone());
    let agenda = seed_agenda(&app).await;

    let other_company = seed_company(&app, "Salão Vizinho").await;
    let intruder = seed_professional(&app, other_company, "Carlos Souza").await;

    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/companies/{}/appointments", agenda.company_id),
        Some(json!({
            "client_id": agenda.client_id,
            "professional_id": intruder,
            "service_id": agenda.service_id,
            "start_time": "2024-01-10T09:00:00Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Profissional não pertence a esta empresa");

    // Falha antes de qualquer escrita: nenhuma linha pode ter sido criada.
    let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM appointments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn listagem_respeita_faixa_inclusiva_e_ordenacao(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;

    // Criados fora de ordem de propósito; um deles fica fora da faixa.
    seed_appointment(&app, &agenda, "2024-01-10T11:00:00Z").await;
    seed_appointment(&app, &agenda, "2024-01-15T10:00:00Z").await;
    seed_appointment(&app, &agenda, "2024-01-10T09:00:00Z").await;
    seed_appointment(&app, &agenda, "2024-01-09T10:00:00Z").await;

    let (status, body) = request(
        &app,
        Method::GET,
        &format!(
            "/companies/{}/appointments?date_from=2024-01-09&date_to=2024-01-10",
            agenda.company_id
        ),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    // A faixa é inclusiva nas duas pontas e a ordem é (date, start_time).
    let starts: Vec<DateTime<Utc>> = rows
        .iter()
        .map(|row| timestamp_of(row, "start_time"))
        .collect();
    assert_eq!(
        starts,
        vec![
            "2024-01-09T10:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            "2024-01-10T09:00:00Z".parse().unwrap(),
            "2024-01-10T11:00:00Z".parse().unwrap(),
        ]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn disponibilidade_ignora_cancelados_e_concluidos(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;

    seed_appointment(&app, &agenda, "2024-01-10T09:00:00Z").await;
    seed_appointment(&app, &agenda, "2024-01-10T11:00:00Z").await;
    let cancelled = seed_appointment(&app, &agenda, "2024-01-10T14:00:00Z").await;
    let completed = seed_appointment(&app, &agenda, "2024-01-10T16:00:00Z").await;

    // Um cancelado via DELETE, um concluído via atualização de status.
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!(
            "/companies/{}/appointments/{}",
            agenda.company_id,
            id_of(&cancelled)
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::PUT,
        &format!(
            "/companies/{}/appointments/{}",
            agenda.company_id,
            id_of(&completed)
        ),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &app,
        Method::GET,
        &format!(
            "/companies/{}/availability?professional_id={}&date=2024-01-10",
            agenda.company_id, agenda.professional_id
        ),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slots = body["occupied_slots"].as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(
        timestamp_of(&slots[0], "start_time"),
        "2024-01-10T09:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(
        timestamp_of(&slots[1], "start_time"),
        "2024-01-10T11:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn troca_de_servico_recalcula_com_o_inicio_gravado(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;
    let longer = seed_service(&app, agenda.company_id, "Corte e barba", 90).await;

    let created = seed_appointment(&app, &agenda, "2024-01-10T09:00:00Z").await;

    // Só o serviço muda: hora_fim usa o início antigo com a duração nova.
    let (status, body) = request(
        &app,
        Method::PUT,
        &format!(
            "/companies/{}/appointments/{}",
            agenda.company_id,
            id_of(&created)
        ),
        Some(json!({ "service_id": longer })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        timestamp_of(&body, "start_time"),
        "2024-01-10T09:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(
        timestamp_of(&body, "end_time"),
        "2024-01-10T10:30:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn atualizacao_so_de_status_preserva_a_janela_e_notes(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;

    let (status, created) = request(
        &app,
        Method::POST,
        &format!("/companies/{}/appointments", agenda.company_id),
        Some(json!({
            "client_id": agenda.client_id,
            "professional_id": agenda.professional_id,
            "service_id": agenda.service_id,
            "start_time": "2024-01-10T09:00:00Z",
            "notes": "trazer documento",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!(
        "/companies/{}/appointments/{}",
        agenda.company_id,
        id_of(&created)
    );

    // notes ausente no corpo: o valor gravado permanece.
    let (status, body) = request(&app, Method::PUT, &uri, Some(json!({ "status": "confirmed" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["notes"], "trazer documento");
    assert_eq!(
        timestamp_of(&body, "start_time"),
        timestamp_of(&created, "start_time")
    );
    assert_eq!(
        timestamp_of(&body, "end_time"),
        timestamp_of(&created, "end_time")
    );

    // null explícito limpa o campo.
    let (status, body) = request(&app, Method::PUT, &uri, Some(json!({ "notes": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["notes"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn cancelar_duas_vezes_nao_e_erro(pool: PgPool) {
    let app = app(pool);
    let agenda = seed_agenda(&app).await;
    let created = seed_appointment(&app, &agenda, "2024-01-10T09:00:00Z").await;

    let uri = format!(
        "/companies/{}/appointments/{}",
        agenda.company_id,
        id_of(&created)
    );

    for _ in 0..2 {
        let (status, body) = request(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "cancelled");
    }
}
