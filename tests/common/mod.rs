#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::web::{Data, Json, Path, Query};
use poem::{get, handler, EndpointExt, IntoResponse, Response, Route, Server};
use serde::Deserialize;
use serde_json::json;

pub const ETHANOL_CID: u64 = 702;
pub const ETHANOL_INCHIKEY: &str = "LFQSCWFLJHTTHZ-UHFFFAOYSA-N";
pub const ETHANOL_SYNONYMS: [&str; 7] = [
    "ethanol",
    "ethyl alcohol",
    "alcohol",
    "64-17-5",
    "Ethyl hydroxide",
    "Methylcarbinol",
    "Absolute ethanol",
];

/// Known to the fake, but its name comes back without `IUPACName` and its
/// synonyms come back as HTML.
pub const ASPIRIN_CID: u64 = 2244;
pub const ASPIRIN_SMILES: &str = "CC(=O)Oc1ccccc1C(=O)O";

/// Resolves to a CID whose detail endpoints answer HTTP 500.
pub const BROKEN_CID: u64 = 666;
pub const BROKEN_SMILES: &str = "C[N+](C)(C)C";

/// The CID endpoint answers with the wrong JSON shape for this one.
pub const MALFORMED_SMILES: &str = "c1ccccc1";

/// Nothing listens here.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/rest/pug";

#[derive(Deserialize)]
struct SmilesQuery {
    smiles: String,
}

#[handler]
fn cids_by_inchikey(Path(key): Path<String>, requests: Data<&Arc<AtomicUsize>>) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);

    if key == ETHANOL_INCHIKEY {
        Json(json!({"IdentifierList": {"CID": [ETHANOL_CID]}})).into_response()
    } else {
        let fault = Json(json!({"Fault": {"Code": "PUGREST.NotFound", "Message": "No CID found"}}));
        (StatusCode::NOT_FOUND, fault).into_response()
    }
}

#[handler]
fn cids_by_smiles(Query(query): Query<SmilesQuery>, requests: Data<&Arc<AtomicUsize>>) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);

    let cid = match query.smiles.as_str() {
        "CCO" => ETHANOL_CID,
        ASPIRIN_SMILES => ASPIRIN_CID,
        BROKEN_SMILES => BROKEN_CID,
        MALFORMED_SMILES => return Json(json!({"IdentifierList": "CID"})).into_response(),
        _ => 0,
    };
    Json(json!({"IdentifierList": {"CID": [cid]}})).into_response()
}

#[handler]
fn iupac_name(Path(cid): Path<u64>, requests: Data<&Arc<AtomicUsize>>) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);

    match cid {
        ETHANOL_CID => Json(json!({
            "PropertyTable": {"Properties": [{"CID": ETHANOL_CID, "IUPACName": "ethanol"}]}
        }))
        .into_response(),
        ASPIRIN_CID => Json(json!({
            "PropertyTable": {"Properties": [{"CID": ASPIRIN_CID}]}
        }))
        .into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[handler]
fn synonyms(Path(cid): Path<u64>, requests: Data<&Arc<AtomicUsize>>) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);

    match cid {
        ETHANOL_CID => Json(json!({
            "InformationList": {"Information": [{"CID": ETHANOL_CID, "Synonym": ETHANOL_SYNONYMS}]}
        }))
        .into_response(),
        ASPIRIN_CID => "<html><body>Service busy</body></html>".into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// A loopback stand-in for the PUG-REST endpoints, counting every request it
/// serves.
pub struct FakePubChem {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl FakePubChem {
    pub async fn start() -> Self {
        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .expect("fake PubChem failed to bind");
        let addr = *acceptor
            .local_addr()
            .first()
            .and_then(|addr| addr.as_socket_addr())
            .expect("fake PubChem has no socket address");

        let requests = Arc::new(AtomicUsize::new(0));
        let app = Route::new()
            .at(
                "/rest/pug/compound/inchikey/:key/cids/JSON",
                get(cids_by_inchikey),
            )
            .at("/rest/pug/compound/smiles/cids/JSON", get(cids_by_smiles))
            .at(
                "/rest/pug/compound/cid/:cid/property/IUPACName/JSON",
                get(iupac_name),
            )
            .at("/rest/pug/compound/cid/:cid/synonyms/JSON", get(synonyms))
            .data(requests.clone());

        // the socket is already listening, so connections queue until the
        // server task first runs
        tokio::spawn(Server::new_with_acceptor(acceptor).run(app));

        Self {
            base_url: format!("http://{}/rest/pug", addr),
            requests,
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}
