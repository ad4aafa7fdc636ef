use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::pubchem::response::{CidResponse, PropertyResponse, SynonymResponse};
use crate::pubchem::{LookupError, StructureKey};

pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubChemRecord {
    pub cid: u64,
    pub iupac_name: Option<String>,
    pub synonyms: Vec<String>,
}

/// Thin PUG-REST client. Every lookup issues exactly one GET and folds any
/// failure into an absent result.
pub struct PubChemClient {
    http: reqwest::Client,
    base_url: String,
}

impl PubChemClient {
    pub fn new(base_url: &str) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a structure to its CID, then fetches name and synonyms one
    /// after the other. `None` means the structure is unknown to PubChem or
    /// PubChem could not be asked.
    pub async fn lookup(&self, key: &StructureKey) -> Option<PubChemRecord> {
        let cid = self.cid_for_key(key).await?;
        log::info!("{} resolved to CID {}", key, cid);

        let iupac_name = self.iupac_name(cid).await;
        let synonyms = self.synonyms(cid).await;

        Some(PubChemRecord {
            cid,
            iupac_name,
            synonyms,
        })
    }

    pub async fn cid_for_key(&self, key: &StructureKey) -> Option<u64> {
        let request = match key {
            StructureKey::InchiKey(inchikey) => self.http.get(format!(
                "{}/compound/inchikey/{}/cids/JSON",
                self.base_url, inchikey
            )),
            StructureKey::Smiles(smiles) => self
                .http
                .get(format!("{}/compound/smiles/cids/JSON", self.base_url))
                .query(&[("smiles", smiles.as_str())]),
        };

        let result = self
            .get_json::<CidResponse>(request)
            .await
            .and_then(CidResponse::first_cid);
        settle("CID", result)
    }

    pub async fn iupac_name(&self, cid: u64) -> Option<String> {
        let request = self.http.get(format!(
            "{}/compound/cid/{}/property/IUPACName/JSON",
            self.base_url, cid
        ));

        let result = self
            .get_json::<PropertyResponse>(request)
            .await
            .and_then(PropertyResponse::iupac_name);
        settle("IUPAC name", result)
    }

    pub async fn synonyms(&self, cid: u64) -> Vec<String> {
        let request = self.http.get(format!(
            "{}/compound/cid/{}/synonyms/JSON",
            self.base_url, cid
        ));

        let result = self
            .get_json::<SynonymResponse>(request)
            .await
            .and_then(SynonymResponse::synonyms);
        settle("synonyms", result).unwrap_or_default()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, LookupError> {
        let response = request.send().await?;
        log::debug!("GET {} -> {}", response.url(), response.status());

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn settle<T>(what: &str, result: Result<T, LookupError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_unreachable() => {
            log::info!("{} lookup skipped: {}", what, e);
            None
        }
        Err(e) => {
            log::debug!("{} lookup found nothing: {}", what, e);
            None
        }
    }
}
