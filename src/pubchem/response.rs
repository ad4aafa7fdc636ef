//! Response bodies of the PUG-REST endpoints used here. Every level is
//! optional so that an unexpected shape surfaces as a missing field rather
//! than a deserialization failure.

use serde::Deserialize;

use crate::pubchem::LookupError;

#[derive(Debug, Default, Deserialize)]
pub struct CidResponse {
    #[serde(rename = "IdentifierList")]
    pub identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdentifierList {
    #[serde(rename = "CID", default)]
    pub cid: Vec<u64>,
}

impl CidResponse {
    /// PubChem reports an unknown structure as CID 0.
    pub fn first_cid(self) -> Result<u64, LookupError> {
        self.identifier_list
            .and_then(|list| list.cid.first().copied())
            .filter(|cid| *cid != 0)
            .ok_or(LookupError::MissingField("IdentifierList.CID"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertyResponse {
    #[serde(rename = "PropertyTable")]
    pub property_table: Option<PropertyTable>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertyTable {
    #[serde(rename = "Properties", default)]
    pub properties: Vec<CompoundProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    #[serde(rename = "IUPACName")]
    pub iupac_name: Option<String>,
}

impl PropertyResponse {
    pub fn iupac_name(self) -> Result<String, LookupError> {
        self.property_table
            .and_then(|table| table.properties.into_iter().next())
            .and_then(|properties| properties.iupac_name)
            .filter(|name| !name.is_empty())
            .ok_or(LookupError::MissingField("PropertyTable.Properties.IUPACName"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SynonymResponse {
    #[serde(rename = "InformationList")]
    pub information_list: Option<InformationList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InformationList {
    #[serde(rename = "Information", default)]
    pub information: Vec<Information>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Information {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    #[serde(rename = "Synonym", default)]
    pub synonym: Vec<String>,
}

impl SynonymResponse {
    /// A record without a `Synonym` array is a compound with no synonyms, not
    /// a malformed answer.
    pub fn synonyms(self) -> Result<Vec<String>, LookupError> {
        self.information_list
            .and_then(|list| list.information.into_iter().next())
            .map(|information| information.synonym)
            .ok_or(LookupError::MissingField("InformationList.Information"))
    }
}
