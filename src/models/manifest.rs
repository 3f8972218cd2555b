use serde::Serialize;

/// Add-on manifest served at `/manifest.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<serde_json::Value>,
    pub resources: Vec<&'static str>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            id: "org.titlovi",
            version: env!("CARGO_PKG_VERSION"),
            name: "Titlovi.com",
            description: "Titlovi sa titlovi.com",
            types: vec!["movie", "series"],
            catalogs: Vec::new(),
            resources: vec!["subtitles"],
        }
    }
}
