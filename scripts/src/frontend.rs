//! Keeps the frontend project in sync with deployments: the address map and the raffle's
//! JSON interface.

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use cosmwasm_schema::generate_api;
use raffle::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::error::ExportError;

/// Set to anything to export after deploying
pub const UPDATE_FRONTEND_ENV: &str = "UPDATE_FRONTEND";
pub const FRONTEND_DIR_ENV: &str = "FRONTEND_DIR";
pub const DEFAULT_FRONTEND_DIR: &str = "../raffle-frontend";

/// chain id -> raffle addresses deployed there, oldest first
pub type AddressMap = BTreeMap<String, Vec<String>>;

pub struct FrontendExporter {
    addresses_file: PathBuf,
    abi_file: PathBuf,
}

impl FrontendExporter {
    pub fn new(addresses_file: impl Into<PathBuf>, abi_file: impl Into<PathBuf>) -> Self {
        Self {
            addresses_file: addresses_file.into(),
            abi_file: abi_file.into(),
        }
    }

    /// Files live under `<frontend_dir>/constants`
    pub fn in_dir(frontend_dir: impl AsRef<Path>) -> Self {
        let constants = frontend_dir.as_ref().join("constants");
        Self::new(
            constants.join("contractAddresses.json"),
            constants.join("abi.json"),
        )
    }

    /// `None` unless `UPDATE_FRONTEND` is set
    pub fn from_env() -> Option<Self> {
        env::var_os(UPDATE_FRONTEND_ENV)?;
        Some(Self::in_dir(Self::dir_from_env()))
    }

    /// `FRONTEND_DIR`, or the sibling frontend checkout when unset
    pub fn dir_from_env() -> PathBuf {
        env::var_os(FRONTEND_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR))
    }

    pub fn export(&self, chain_id: &str, address: &str) -> Result<(), ExportError> {
        log::info!("Writing to front end...");
        self.update_contract_addresses(chain_id, address)?;
        self.update_abi()?;
        log::info!("Front end written!");
        Ok(())
    }

    /// Adds `address` under `chain_id` unless it is already listed there.
    /// A missing file is treated as an empty map.
    pub fn update_contract_addresses(
        &self,
        chain_id: &str,
        address: &str,
    ) -> Result<AddressMap, ExportError> {
        let mut addresses = self.read_addresses()?;

        let deployed = addresses.entry(chain_id.to_string()).or_default();
        if !deployed.iter().any(|a| a == address) {
            deployed.push(address.to_string());
        }

        let content = serde_json::to_string(&addresses).map_err(|source| ExportError::Json {
            path: self.addresses_file.display().to_string(),
            source,
        })?;
        write_file(&self.addresses_file, &content)?;

        Ok(addresses)
    }

    /// Rewrites the interface file with the raffle's current JSON API
    pub fn update_abi(&self) -> Result<(), ExportError> {
        let api = raffle_api().map_err(|source| ExportError::Json {
            path: self.abi_file.display().to_string(),
            source,
        })?;
        write_file(&self.abi_file, &api)
    }

    fn read_addresses(&self) -> Result<AddressMap, ExportError> {
        let content = match fs::read_to_string(&self.addresses_file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AddressMap::new()),
            Err(source) => {
                return Err(ExportError::Io {
                    path: self.addresses_file.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| ExportError::Json {
            path: self.addresses_file.display().to_string(),
            source,
        })
    }
}

pub fn raffle_api() -> Result<String, serde_json::Error> {
    let api = generate_api! {
        name: "raffle",
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
    .render();
    serde_json::to_string_pretty(&api)
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let io_error = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, content).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_address_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrontendExporter::in_dir(dir.path());

        let addresses = exporter
            .update_contract_addresses("local", "raffle-1")
            .unwrap();
        assert_eq!(
            addresses,
            AddressMap::from([("local".to_string(), vec!["raffle-1".to_string()])])
        );

        let written = fs::read_to_string(dir.path().join("constants/contractAddresses.json"))
            .unwrap();
        assert_eq!(written, r#"{"local":["raffle-1"]}"#);
    }

    #[test]
    fn addresses_are_appended_once() {
        let dir = tempfile::tempdir().unwrap();
        let addresses_file = dir.path().join("addresses.json");
        fs::write(&addresses_file, r#"{"elgafar-1":["stars1old"]}"#).unwrap();
        let exporter = FrontendExporter::new(&addresses_file, dir.path().join("abi.json"));

        exporter
            .update_contract_addresses("elgafar-1", "stars1new")
            .unwrap();
        exporter
            .update_contract_addresses("elgafar-1", "stars1new")
            .unwrap();
        let addresses = exporter
            .update_contract_addresses("local", "stars1new")
            .unwrap();

        assert_eq!(
            addresses["elgafar-1"],
            vec!["stars1old".to_string(), "stars1new".to_string()]
        );
        assert_eq!(addresses["local"], vec!["stars1new".to_string()]);
    }

    #[test]
    fn corrupted_address_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let addresses_file = dir.path().join("addresses.json");
        fs::write(&addresses_file, "not json").unwrap();
        let exporter = FrontendExporter::new(&addresses_file, dir.path().join("abi.json"));

        let err = exporter
            .update_contract_addresses("local", "raffle-1")
            .unwrap_err();
        assert!(matches!(err, ExportError::Json { .. }));
        // Left untouched
        assert_eq!(fs::read_to_string(&addresses_file).unwrap(), "not json");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let exporter = FrontendExporter::in_dir(&blocker);

        let err = exporter.export("local", "raffle-1").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn frontend_dir_comes_from_the_environment() {
        let dir = tempfile::tempdir().unwrap();

        env::set_var(FRONTEND_DIR_ENV, dir.path());
        assert_eq!(FrontendExporter::dir_from_env(), dir.path());
        FrontendExporter::in_dir(FrontendExporter::dir_from_env())
            .export("local", "raffle-1")
            .unwrap();
        assert!(dir.path().join("constants/contractAddresses.json").exists());
        assert!(dir.path().join("constants/abi.json").exists());

        env::remove_var(FRONTEND_DIR_ENV);
        assert_eq!(
            FrontendExporter::dir_from_env(),
            PathBuf::from(DEFAULT_FRONTEND_DIR)
        );
    }

    #[test]
    fn abi_describes_the_raffle() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrontendExporter::in_dir(dir.path());
        exporter.update_abi().unwrap();

        let abi: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("constants/abi.json")).unwrap())
                .unwrap();
        assert_eq!(abi["contract_name"], "raffle");
        let execute = abi["execute"].to_string();
        assert!(execute.contains("enter_raffle"));
        assert!(execute.contains("perform_upkeep"));
        assert!(abi["query"].to_string().contains("check_upkeep"));
    }
}
