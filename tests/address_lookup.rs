use miazy::AddressLookupError;
use miazy::config::AddressLookupConfig;
use miazy::handler::AddressLookup;
use miazy::handler::HomeScreen;
use miazy::handler::ViaCepClient;
use miazy::model::Address;
use miazy::model::Cep;
use miazy::model::Notice;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

async fn client_for(server: &MockServer) -> ViaCepClient {
    let config = AddressLookupConfig {
        base_url: format!("{}/ws/", server.uri()),
    };
    ViaCepClient::new(&config).expect("mock server uri is a valid base url")
}

fn cep(code: &str) -> Cep {
    Cep::parse(code).expect("test CEP is valid")
}

#[test_log::test(tokio::test)]
async fn found_cep_maps_to_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/11700000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "11700-000",
            "logradouro": "",
            "complemento": "",
            "bairro": "Boqueirão",
            "localidade": "Praia Grande",
            "uf": "SP",
            "ibge": "3541000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let address = client_for(&server).await.lookup(&cep("11700000")).await.unwrap();

    assert_eq!(
        address,
        Address {
            city: "Praia Grande".to_string(),
            state: "SP".to_string(),
            neighborhood: "Boqueirão".to_string(),
        }
    );
}

#[tokio::test]
async fn erro_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.lookup(&cep("99999999")).await.unwrap_err();

    assert_eq!(err, AddressLookupError::NotFound("99999999".to_string()));
    assert_eq!(Notice::from(&err).body, "CEP não encontrado");
}

#[tokio::test]
async fn server_error_is_a_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).await.lookup(&cep("11700000")).await.unwrap_err();

    assert!(matches!(err, AddressLookupError::Connection(_)), "got {:?}", err);
}

#[tokio::test]
async fn html_body_is_a_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bad Request</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.lookup(&cep("11700000")).await.unwrap_err();

    assert_eq!(Notice::from(&err), Notice::new("Erro", "Falha na conexão"));
}

#[tokio::test]
async fn unreachable_service_is_a_connection_failure() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    drop(server);

    let err = client.lookup(&cep("11700000")).await.unwrap_err();

    assert!(matches!(err, AddressLookupError::Connection(_)), "got {:?}", err);
}

#[tokio::test]
async fn home_screen_searches_once_and_keeps_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/11700000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bairro": "Boqueirão",
            "localidade": "Praia Grande",
            "uf": "SP"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": "true" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut home = HomeScreen::new(client_for(&server).await);
    home.set_cep("11700000");
    assert!(home.can_search());
    home.search().await.unwrap();

    home.set_cep("99999999");
    assert!(home.search().await.is_err());

    assert_eq!(home.address().map(ToString::to_string), Some("Boqueirão, Praia Grande - SP".to_string()));
}

#[tokio::test]
async fn short_cep_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut home = HomeScreen::new(client_for(&server).await);
    home.set_cep("1170");

    assert!(!home.can_search());
    let err = home.search().await.unwrap_err();
    assert_eq!(Notice::from(&err), Notice::new("CEP inválido", "Digite 8 números"));
}
