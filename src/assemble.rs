//! Assembly of the Lira configuration document.
//!
//! The output is a single JSON object: a fixed base section, the secrets
//! document merged over it, and a `wdls` list naming the two adapter
//! workflows Lira can dispatch notifications to.

use serde_json::json;

use crate::domain::{
    EnvConfig, OutputConfig, PathPrefixes, SecretsConfig, WdlDescriptor, MAX_CONTENT_LENGTH,
    SS2_WORKFLOW_NAME, TENX_WORKFLOW_NAME,
};

/// Assemble the full configuration document.
///
/// Pure: identical inputs yield an identical document, and nothing here does
/// I/O or touches shared state. Merge precedence is last-wins: secrets
/// override the base keys, and the built `wdls` list overrides any `wdls`
/// entry the secrets carried.
pub fn assemble(
    prefixes: &PathPrefixes,
    env_config: &EnvConfig,
    secrets: SecretsConfig,
) -> OutputConfig {
    let mut config = OutputConfig::new();
    config.insert("env".to_string(), json!(env_config.env));
    config.insert("cromwell_url".to_string(), json!(cromwell_url(&env_config.env)));
    config.insert("MAX_CONTENT_LENGTH".to_string(), json!(MAX_CONTENT_LENGTH));
    config.insert(
        "submit_wdl".to_string(),
        json!(format!("{}/adapter_pipelines/submit.wdl", prefixes.pipeline_tools)),
    );

    // Secrets land verbatim; on a key collision the secret value wins.
    config.extend(secrets);

    // Inserted after the secrets merge, so a stray `wdls` secret is replaced.
    let wdls = vec![tenx_descriptor(prefixes, env_config), ss2_descriptor(prefixes, env_config)];
    config.insert("wdls".to_string(), json!(wdls));

    config
}

/// Cromwell endpoint for a deployment environment.
fn cromwell_url(env: &str) -> String {
    format!("https://cromwell.mint-{env}.broadinstitute.org/api/workflows/v1")
}

fn tenx_descriptor(prefixes: &PathPrefixes, env_config: &EnvConfig) -> WdlDescriptor {
    let pt = &prefixes.pipeline_tools;
    WdlDescriptor {
        subscription_id: env_config.tenx_subscription_id.clone(),
        workflow_name: TENX_WORKFLOW_NAME,
        analysis_wdls: vec![format!("{}/pipelines/10x/count/count.wdl", prefixes.tenx)],
        wdl_link: format!("{pt}/adapter_pipelines/10x/adapter.wdl"),
        wdl_default_inputs_link: format!("{pt}/adapter_pipelines/10x/adapter_example_static.json"),
        options_link: format!("{pt}/adapter_pipelines/10x/options.json"),
    }
}

fn ss2_descriptor(prefixes: &PathPrefixes, env_config: &EnvConfig) -> WdlDescriptor {
    let pt = &prefixes.pipeline_tools;
    let ss2 = &prefixes.ss2;
    WdlDescriptor {
        subscription_id: env_config.ss2_subscription_id.clone(),
        workflow_name: SS2_WORKFLOW_NAME,
        analysis_wdls: vec![
            format!("{ss2}/pipelines/smartseq2_single_sample/ss2_single_sample.wdl"),
            format!("{ss2}/library/subworkflows/hisat2_QC_pipeline.wdl"),
            format!("{ss2}/library/subworkflows/hisat2_rsem_pipeline.wdl"),
            format!("{ss2}/library/tasks/hisat2.wdl"),
            format!("{ss2}/library/tasks/picard.wdl"),
            format!("{ss2}/library/tasks/rsem.wdl"),
        ],
        wdl_link: format!("{pt}/adapter_pipelines/ss2_single_sample/adapter.wdl"),
        wdl_default_inputs_link: format!(
            "{pt}/adapter_pipelines/ss2_single_sample/adapter_example_static.json"
        ),
        options_link: format!("{pt}/adapter_pipelines/ss2_single_sample/options.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn prefixes() -> PathPrefixes {
        PathPrefixes {
            pipeline_tools: "PT".to_string(),
            tenx: "TX".to_string(),
            ss2: "SS".to_string(),
        }
    }

    fn env_config() -> EnvConfig {
        EnvConfig {
            env: "dev".to_string(),
            tenx_subscription_id: "sub10x".to_string(),
            ss2_subscription_id: "subss2".to_string(),
        }
    }

    #[test]
    fn base_keys_and_secrets_present() {
        let mut secrets = SecretsConfig::new();
        secrets.insert("api_key".to_string(), json!("xyz"));

        let config = assemble(&prefixes(), &env_config(), secrets);

        assert_eq!(config["env"], json!("dev"));
        assert_eq!(
            config["cromwell_url"],
            json!("https://cromwell.mint-dev.broadinstitute.org/api/workflows/v1")
        );
        assert_eq!(config["MAX_CONTENT_LENGTH"], json!(10000));
        assert_eq!(config["submit_wdl"], json!("PT/adapter_pipelines/submit.wdl"));
        assert_eq!(config["api_key"], json!("xyz"));
    }

    #[test]
    fn wdls_has_exactly_two_descriptors_in_fixed_order() {
        let config = assemble(&prefixes(), &env_config(), SecretsConfig::new());

        let wdls = config["wdls"].as_array().expect("wdls array");
        assert_eq!(wdls.len(), 2);
        assert_eq!(wdls[0]["workflow_name"], json!("Adapter10xCount"));
        assert_eq!(wdls[1]["workflow_name"], json!("AdapterSmartSeq2SingleCell"));
        assert_eq!(wdls[0]["subscription_id"], json!("sub10x"));
        assert_eq!(wdls[1]["subscription_id"], json!("subss2"));
    }

    #[test]
    fn tenx_descriptor_links() {
        let config = assemble(&prefixes(), &env_config(), SecretsConfig::new());

        let tenx = &config["wdls"][0];
        assert_eq!(tenx["analysis_wdls"], json!(["TX/pipelines/10x/count/count.wdl"]));
        assert_eq!(tenx["wdl_link"], json!("PT/adapter_pipelines/10x/adapter.wdl"));
        assert_eq!(
            tenx["wdl_default_inputs_link"],
            json!("PT/adapter_pipelines/10x/adapter_example_static.json")
        );
        assert_eq!(tenx["options_link"], json!("PT/adapter_pipelines/10x/options.json"));
    }

    #[test]
    fn ss2_analysis_wdls_order() {
        let config = assemble(&prefixes(), &env_config(), SecretsConfig::new());

        assert_eq!(
            config["wdls"][1]["analysis_wdls"],
            json!([
                "SS/pipelines/smartseq2_single_sample/ss2_single_sample.wdl",
                "SS/library/subworkflows/hisat2_QC_pipeline.wdl",
                "SS/library/subworkflows/hisat2_rsem_pipeline.wdl",
                "SS/library/tasks/hisat2.wdl",
                "SS/library/tasks/picard.wdl",
                "SS/library/tasks/rsem.wdl",
            ])
        );
    }

    #[test]
    fn secrets_pass_through_unchanged() {
        let mut secrets = SecretsConfig::new();
        secrets.insert("api_key".to_string(), json!("xyz"));
        secrets.insert("notification_token".to_string(), json!(12345));
        secrets.insert("nested".to_string(), json!({"user": "svc", "pass": "pw"}));

        let config = assemble(&prefixes(), &env_config(), secrets.clone());

        for (key, value) in &secrets {
            assert_eq!(&config[key], value, "secret '{key}' must pass through unchanged");
        }
    }

    #[test]
    fn secrets_override_base_keys() {
        // Last-wins: the secrets document is merged over the base section.
        let mut secrets = SecretsConfig::new();
        secrets.insert("env".to_string(), json!("shadowed"));
        secrets.insert("MAX_CONTENT_LENGTH".to_string(), json!(1));

        let config = assemble(&prefixes(), &env_config(), secrets);

        assert_eq!(config["env"], json!("shadowed"));
        assert_eq!(config["MAX_CONTENT_LENGTH"], json!(1));
        // The Cromwell URL is built from the env config, not the merged value.
        assert_eq!(
            config["cromwell_url"],
            json!("https://cromwell.mint-dev.broadinstitute.org/api/workflows/v1")
        );
    }

    #[test]
    fn built_wdls_replace_secret_wdls() {
        let mut secrets = SecretsConfig::new();
        secrets.insert("wdls".to_string(), json!(["bogus"]));

        let config = assemble(&prefixes(), &env_config(), secrets);

        let wdls = config["wdls"].as_array().expect("wdls array");
        assert_eq!(wdls.len(), 2);
        assert!(wdls.iter().all(Value::is_object));
    }

    #[test]
    fn empty_prefixes_produce_rootless_paths() {
        let prefixes = PathPrefixes {
            pipeline_tools: String::new(),
            tenx: String::new(),
            ss2: String::new(),
        };

        let config = assemble(&prefixes, &env_config(), SecretsConfig::new());

        assert_eq!(config["submit_wdl"], json!("/adapter_pipelines/submit.wdl"));
        assert_eq!(config["wdls"][0]["analysis_wdls"], json!(["/pipelines/10x/count/count.wdl"]));
    }

    #[test]
    fn assembly_is_deterministic() {
        let mut secrets = SecretsConfig::new();
        secrets.insert("api_key".to_string(), json!("xyz"));

        let first = assemble(&prefixes(), &env_config(), secrets.clone());
        let second = assemble(&prefixes(), &env_config(), secrets);

        assert_eq!(first, second);
    }
}
