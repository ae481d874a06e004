//! End-to-end validation tests: YAML text through the loader into the
//! validation engine
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use podlint_core::{parse_manifest, validate, Diagnostics, LoaderError, Node, ScalarNode, ScalarTag};

fn run(yaml: &str) -> Diagnostics {
    let root = parse_manifest(yaml).expect("fixture must parse");
    validate(&root)
}

fn messages(diagnostics: &Diagnostics) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

const VALID_MANIFEST: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
  namespace: prod
  labels:
    app: web
spec:
  os: linux
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      ports:
        - containerPort: 8080
          protocol: TCP
      readinessProbe:
        httpGet:
          path: /healthz
          port: 8080
      livenessProbe:
        httpGet:
          path: /livez
          port: 8080
      resources:
        limits:
          cpu: 2
          memory: 512Mi
        requests:
          cpu: 1
          memory: 256Mi
";

#[test]
fn valid_manifest_yields_no_diagnostics() {
    let diagnostics = run(VALID_MANIFEST);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn validation_is_idempotent() {
    let root = parse_manifest(VALID_MANIFEST.replace("v1", "v9").as_str()).unwrap();
    let first = validate(&root);
    let second = validate(&root);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn missing_required_field_is_reported_once_without_line() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  namespace: prod
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["name is required"]);
    assert_eq!(diagnostics.iter().next().unwrap().line, 0);
}

#[test]
fn sibling_errors_keep_schema_declaration_order() {
    let yaml = "\
apiVersion: v2
kind: Deployment
spec:
  os: macos
";
    let diagnostics = run(yaml);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "apiVersion has unsupported value 'v2'",
            "kind has unsupported value 'Deployment'",
            "metadata is required",
            "os has unsupported value 'macos'",
            "containers is required",
        ]
    );
}

#[test]
fn unsupported_api_version_does_not_stop_other_checks() {
    let yaml = VALID_MANIFEST.replace("apiVersion: v1", "apiVersion: v2");
    let diagnostics = run(&yaml);
    assert_eq!(messages(&diagnostics), vec!["apiVersion has unsupported value 'v2'"]);
    assert_eq!(diagnostics.iter().next().unwrap().line, 1);
}

#[test]
fn container_port_boundaries() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      ports:
        - containerPort: 0
        - containerPort: 1
        - containerPort: 65535
        - containerPort: 65536
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "containerPort value out of range",
            "containerPort value out of range",
        ]
    );
    let lines: Vec<_> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![10, 13]);
}

#[test]
fn duplicate_container_names_flag_the_second_occurrence() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: api
      image: registry.bigbrother.io/team/api:1.0.0
      resources: {}
    - name: api
      image: registry.bigbrother.io/team/api:2.0.0
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["name has invalid format 'api'"]);
    assert_eq!(diagnostics.iter().next().unwrap().line, 10);
}

#[test]
fn uppercase_name_fails_the_pattern_without_a_duplicate_diagnostic() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: API
      image: registry.bigbrother.io/team/api:1.0.0
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["name has invalid format 'API'"]);
}

#[test]
fn bad_image_reference_quotes_the_value() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: myimage
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["image has invalid format 'myimage'"]);
}

#[test]
fn memory_without_recognized_suffix_is_invalid() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources:
        limits:
          memory: \"5Tb\"
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["memory has invalid format '5Tb'"]);
}

#[test]
fn unknown_resource_keys_are_silently_accepted() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources:
        limits:
          gpu: 4
          hugepages: 2Gi
";
    assert!(run(yaml).is_empty());
}

#[test]
fn probe_contract_violations() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      readinessProbe:
        httpGet:
          path: healthz
          port: 0
      livenessProbe: {}
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "path has invalid format 'healthz'",
            "port value out of range",
            "httpGet is required",
        ]
    );
}

#[test]
fn wrong_shape_subtree_stops_without_cascading() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata: just-a-string
spec:
  containers:
    - plain_entry
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(
        messages(&diagnostics),
        vec!["metadata must be object", "containers must be object"]
    );
}

#[test]
fn label_values_must_be_scalars() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
  labels:
    app:
      nested: true
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources: {}
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["labels must be string"]);
}

#[test]
fn quoted_cpu_value_is_not_an_integer_literal() {
    // Built directly so the check is independent of any one parser's
    // coercion rules.
    use podlint_core::{MappingNode, SequenceNode};

    let key = |name: &str| ScalarNode::new(name, ScalarTag::Str, 0);
    let string = |value: &str, line: usize| {
        Node::Scalar(ScalarNode::new(value, ScalarTag::Str, line))
    };

    let limits = Node::Mapping(MappingNode {
        entries: vec![(key("cpu"), string("2", 12))],
        line: 11,
    });
    let resources = Node::Mapping(MappingNode {
        entries: vec![(key("limits"), limits)],
        line: 10,
    });
    let container = Node::Mapping(MappingNode {
        entries: vec![
            (key("name"), string("web", 7)),
            (
                key("image"),
                string("registry.bigbrother.io/team/web:1.2.3", 8),
            ),
            (key("resources"), resources),
        ],
        line: 7,
    });
    let spec = Node::Mapping(MappingNode {
        entries: vec![(
            key("containers"),
            Node::Sequence(SequenceNode {
                items: vec![container],
                line: 6,
            }),
        )],
        line: 5,
    });
    let metadata = Node::Mapping(MappingNode {
        entries: vec![(key("name"), string("web", 4))],
        line: 3,
    });
    let root = Node::Mapping(MappingNode {
        entries: vec![
            (key("apiVersion"), string("v1", 1)),
            (key("kind"), string("Pod", 2)),
            (key("metadata"), metadata),
            (key("spec"), spec),
        ],
        line: 1,
    });

    let diagnostics = validate(&root);
    assert_eq!(messages(&diagnostics), vec!["cpu must be int"]);
    assert_eq!(diagnostics.iter().next().unwrap().line, 12);
}

#[test]
fn quoted_cpu_value_is_flagged_through_the_loader() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/team/web:1.2.3
      resources:
        limits:
          cpu: \"2\"
";
    let diagnostics = run(yaml);
    assert_eq!(messages(&diagnostics), vec!["cpu must be int"]);
    assert_eq!(diagnostics.iter().next().unwrap().line, 11);

    let unquoted = yaml.replace("\"2\"", "2");
    assert!(run(&unquoted).is_empty());
}

#[test]
fn non_mapping_root_yields_one_document_level_diagnostic() {
    let root = Node::Scalar(ScalarNode::new("oops", ScalarTag::Str, 1));
    let diagnostics = validate(&root);
    assert_eq!(messages(&diagnostics), vec!["root must be object"]);
}

#[test]
fn empty_document_is_rejected_before_validation() {
    assert!(matches!(parse_manifest(""), Err(LoaderError::Empty { .. })));
    assert!(matches!(
        parse_manifest("\n   \n"),
        Err(LoaderError::Empty { .. })
    ));
}
