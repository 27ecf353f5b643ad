use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use service_doclet::{
    cli::{self, CliArgs},
    document::{self, DocumentSet},
    error::Error,
    options::DocletOptions,
    parser::SnapshotParser,
    resource::ResourceAssembler,
    scanner::FileScanner,
    serializer::write_documents,
    type_resolver::TypeResolver,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a temporary directory of snapshot files
fn create_snapshot_dir(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write snapshot file");
    }

    temp_dir
}

/// Runs scan, load, assembly and document building over `input`
fn generate(input: &Path, options: &DocletOptions) -> Result<DocumentSet, Error> {
    let scan_result = FileScanner::new(input.to_path_buf())
        .scan()
        .expect("Failed to scan input");
    let parsed = SnapshotParser::parse_files(&scan_result.snapshot_files)?;

    let resolver = TypeResolver::new(parsed.into_iter().flat_map(|p| p.snapshot.classes));
    let mut assembler = ResourceAssembler::new(&resolver, options);
    assembler.add_all(&resolver)?;

    Ok(document::assemble(assembler.finish(), options))
}

fn cli_args(input: &Path, output_dir: &Path) -> CliArgs {
    CliArgs {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        doc_base_path: "http://localhost:8080".to_string(),
        api_base_path: "http://localhost:8080".to_string(),
        api_version: "0".to_string(),
        max_model_depth: 64,
        include_all_annotated_params: false,
        verbose: false,
    }
}

fn read_json(path: PathBuf) -> Value {
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("Output should be valid JSON")
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_widgets_end_to_end() {
    let output = TempDir::new().unwrap();
    cli::run(cli_args(&fixture("widgets.json"), output.path())).expect("Generation should succeed");

    let declaration = read_json(output.path().join("widgets.json"));
    assert_eq!(
        declaration,
        json!({
            "apiVersion": "0",
            "basePath": "http://localhost:8080",
            "apis": [{
                "path": "/widgets/{id}",
                "description": "",
                "operations": [{
                    "httpMethod": "GET",
                    "nickname": "getWidget",
                    "responseClass": "Widget",
                    "parameters": [{
                        "paramType": "path",
                        "name": "id",
                        "description": "widget identifier",
                        "dataType": "long"
                    }],
                    "summary": "Fetches one widget.",
                    "notes": " Responds 404 when it does not exist."
                }]
            }],
            "models": {
                "Widget": {
                    "id": "Widget",
                    "properties": {
                        "name": { "type": "string", "format": null },
                        "tags": { "type": "List", "format": null, "items": { "type": "string" } }
                    }
                }
            }
        })
    );

    let listing = read_json(output.path().join("service.json"));
    assert_eq!(
        listing,
        json!({
            "apiVersion": "0",
            "basePath": "http://localhost:8080",
            "apis": [{ "path": "/widgets.{format}", "description": "" }]
        })
    );
}

#[test]
fn test_yaml_catalog_resources() {
    let set = generate(&fixture("catalog.yaml"), &DocletOptions::default()).unwrap();

    let file_ids: Vec<_> = set.declarations.iter().map(|d| d.file_id.as_str()).collect();
    assert_eq!(file_ids, vec!["categories_tenant", "products"]);

    let listing_paths: Vec<_> = set.listing.apis.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(
        listing_paths,
        vec!["/categories_tenant.{format}", "/products.{format}"]
    );

    let categories = &set.declarations[0].declaration;
    let api_paths: Vec<_> = categories.apis.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(
        api_paths,
        vec!["/categories/{tenant}", "/categories/{tenant}/{slug}"]
    );

    // Undecorated helper methods are not operations
    let nicknames: Vec<_> = categories
        .apis
        .iter()
        .flat_map(|a| a.operations.iter().map(|o| o.nickname.as_str()))
        .collect();
    assert_eq!(nicknames, vec!["tree", "rename"]);
}

#[test]
fn test_parameter_classification() {
    let set = generate(&fixture("catalog.yaml"), &DocletOptions::default()).unwrap();
    let categories = serde_json::to_value(&set.declarations[0].declaration).unwrap();

    let rename = &categories["apis"][1]["operations"][0];
    assert_eq!(rename["httpMethod"], "PUT");
    assert_eq!(rename["responseClass"], Value::Null);

    // The @Auth-only parameter is dropped; the bare one becomes the body
    assert_eq!(
        rename["parameters"],
        json!([
            { "paramType": "path", "name": "slug", "description": null, "dataType": "string" },
            { "paramType": "body", "name": "label", "description": null, "dataType": "Label" }
        ])
    );

    let products = serde_json::to_value(&set.declarations[1].declaration).unwrap();
    let list = &products["apis"][0]["operations"][0];
    assert_eq!(list["responseClass"], "List");
    assert_eq!(
        list["parameters"],
        json!([{ "paramType": "query", "name": "limit", "description": null, "dataType": "int" }])
    );

    let remove = &products["apis"][1]["operations"][0];
    assert_eq!(remove["httpMethod"], "DELETE");
    assert_eq!(remove["parameters"], json!([]));
}

#[test]
fn test_include_all_annotated_params() {
    let options = DocletOptions {
        parameter_inclusion: service_doclet::extractor::parameter::InclusionPolicy::AnyAnnotation,
        ..DocletOptions::default()
    };
    let set = generate(&fixture("catalog.yaml"), &options).unwrap();
    let categories = &set.declarations[0].declaration;

    let rename = &categories.apis[1].operations[0];
    let names: Vec<_> = rename.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["slug", "user", "label"]);

    // The newly included body parameter pulls its model in
    assert!(categories.models.contains_key("User"));
}

#[test]
fn test_cyclic_models() {
    let set = generate(&fixture("catalog.yaml"), &DocletOptions::default()).unwrap();
    let categories = serde_json::to_value(&set.declarations[0].declaration).unwrap();

    assert_eq!(
        categories["models"],
        json!({
            "Category": {
                "id": "Category",
                "properties": {
                    "name": { "type": "string", "format": null },
                    "parent": { "type": "Category", "format": null },
                    "products": { "type": "List", "format": null, "items": { "type": "product" } }
                }
            },
            "Label": {
                "id": "Label",
                "properties": { "text": { "type": "string", "format": null } }
            },
            "product": {
                "id": "product",
                "properties": {
                    "category": { "type": "Category", "format": null },
                    "created": { "type": "Date", "format": null },
                    "price": { "type": "double", "format": null },
                    "sku": { "type": "string", "format": null }
                }
            }
        })
    );

    // Models are scoped to the resource that references them
    let products = &set.declarations[1].declaration;
    let model_names: Vec<_> = products.models.keys().map(String::as_str).collect();
    assert_eq!(model_names, vec!["Category", "product"]);
}

#[test]
fn test_classes_split_across_snapshots() {
    let widgets = fs::read_to_string(fixture("widgets.json")).unwrap();
    let mut snapshot: Value = serde_json::from_str(&widgets).unwrap();
    let classes = snapshot["classes"].as_array_mut().unwrap();
    let model = classes.pop().unwrap();

    let input = create_snapshot_dir(vec![
        ("api/resources.json", serde_json::to_string(&snapshot).unwrap().as_str()),
        ("model/widget.json", json!({ "classes": [model] }).to_string().as_str()),
        ("notes.txt", "not a snapshot"),
    ]);

    let set = generate(input.path(), &DocletOptions::default()).unwrap();
    assert_eq!(set.declarations.len(), 1);
    assert!(set.declarations[0].declaration.models.contains_key("Widget"));
}

#[test]
fn test_output_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    cli::run(cli_args(&fixture("catalog.yaml"), first.path())).unwrap();
    cli::run(cli_args(&fixture("catalog.yaml"), second.path())).unwrap();

    for name in ["categories_tenant.json", "products.json", "service.json"] {
        let a = fs::read(first.path().join(name)).unwrap();
        let b = fs::read(second.path().join(name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
}

#[test]
fn test_write_documents_to_nested_output() {
    let output = TempDir::new().unwrap();
    let out_dir = output.path().join("docs").join("api");

    let set = generate(&fixture("catalog.yaml"), &DocletOptions::default()).unwrap();
    let written = write_documents(&set, &out_dir).unwrap();

    assert_eq!(
        written,
        vec![
            out_dir.join("categories_tenant.json"),
            out_dir.join("products.json"),
            out_dir.join("service.json"),
        ]
    );
}

#[test]
fn test_depth_limit_aborts_run() {
    let chain = json!({
        "classes": [
            {
                "qualifiedName": "com.example.ChainResource",
                "annotations": [{ "type": "javax.ws.rs.Path", "elements": { "value": "/chain" } }],
                "methods": [{
                    "name": "head",
                    "annotations": ["javax.ws.rs.GET"],
                    "returnType": "com.example.L1"
                }]
            },
            { "qualifiedName": "com.example.L1", "fields": [{ "name": "next", "type": "com.example.L2" }] },
            { "qualifiedName": "com.example.L2", "fields": [{ "name": "next", "type": "com.example.L3" }] },
            { "qualifiedName": "com.example.L3", "fields": [{ "name": "value", "type": "int" }] }
        ]
    });
    let input = create_snapshot_dir(vec![("chain.json", chain.to_string().as_str())]);
    let output = TempDir::new().unwrap();

    let mut args = cli_args(input.path(), output.path());
    args.max_model_depth = 2;
    let err = cli::run(args).unwrap_err();
    assert!(format!("{:#}", err).contains("L3"), "unexpected error: {:#}", err);
    assert!(!output.path().join("service.json").exists());

    let mut args = cli_args(input.path(), output.path());
    args.max_model_depth = 3;
    cli::run(args).unwrap();
    let declaration = read_json(output.path().join("chain.json"));
    assert_eq!(declaration["models"].as_object().unwrap().len(), 3);
}

#[test]
fn test_malformed_snapshot_aborts_run() {
    let input = create_snapshot_dir(vec![
        ("a.json", r#"{ "classes": [] }"#),
        ("b.json", r#"{ "classes": "#),
    ]);
    let output = TempDir::new().unwrap();

    let err = cli::run(cli_args(input.path(), output.path())).unwrap_err();
    assert!(err.to_string().contains("b.json"));
    assert!(!output.path().join("service.json").exists());
}

#[test]
fn test_no_resources_writes_empty_listing() {
    let input = create_snapshot_dir(vec![(
        "models.json",
        r#"{ "classes": [ { "qualifiedName": "com.example.Widget", "fields": [ { "name": "id", "type": "long" } ] } ] }"#,
    )]);
    let output = TempDir::new().unwrap();

    cli::run(cli_args(input.path(), output.path())).unwrap();

    let listing = read_json(output.path().join("service.json"));
    assert_eq!(listing["apis"], json!([]));
}
