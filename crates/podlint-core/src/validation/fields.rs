//! Field validators: one recursive-descent routine per schema object
//!
//! Every routine follows the same protocol: a node of the wrong container
//! kind yields exactly one type diagnostic and that subtree is abandoned
//! (no cascading false positives); missing required fields yield a
//! line-less "required" diagnostic; present fields run leaf checks or
//! recurse into the nested validator; sibling fields are always checked
//! independently. Fields the schema does not know are ignored silently,
//! so manifests can grow forward-compatible extensions without tripping
//! the linter.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use crate::document::{Node, ScalarTag};
use crate::validation::checks::{
    check_int_in_range, expect_mapping, expect_scalar, expect_sequence, match_pattern, match_set,
};
use crate::validation::diagnostic::{Diagnostic, Diagnostics};
use crate::validation::patterns;
use std::collections::HashSet;

/// Root document: `apiVersion`, `kind`, `metadata`, `spec`, in that order.
pub(crate) fn validate_pod(doc: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    if let Err(diag) = expect_mapping(doc, "root") {
        diags.push(diag);
        return diags;
    }

    match doc.lookup("apiVersion") {
        None => diags.push(Diagnostic::required("apiVersion")),
        Some(node) => match expect_scalar(node, "apiVersion", "string") {
            Err(diag) => diags.push(diag),
            Ok(scalar) => diags.extend(match_set(scalar, "apiVersion", &[patterns::API_VERSION])),
        },
    }

    match doc.lookup("kind") {
        None => diags.push(Diagnostic::required("kind")),
        Some(node) => match expect_scalar(node, "kind", "string") {
            Err(diag) => diags.push(diag),
            Ok(scalar) => diags.extend(match_set(scalar, "kind", &[patterns::KIND])),
        },
    }

    match doc.lookup("metadata") {
        None => diags.push(Diagnostic::required("metadata")),
        Some(node) => diags.merge(validate_metadata(node)),
    }

    match doc.lookup("spec") {
        None => diags.push(Diagnostic::required("spec")),
        Some(node) => diags.merge(validate_spec(node)),
    }

    diags
}

/// Metadata block: required non-empty `name`, optional `namespace` string,
/// optional `labels` string-to-string mapping.
fn validate_metadata(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    if let Err(diag) = expect_mapping(node, "metadata") {
        diags.push(diag);
        return diags;
    }

    match node.lookup("name") {
        None => diags.push(Diagnostic::required("name")),
        Some(name) => match expect_scalar(name, "name", "string") {
            Err(diag) => diags.push(diag),
            Ok(scalar) if scalar.value.is_empty() => {
                diags.push(Diagnostic::required_at("name", scalar.line));
            }
            Ok(_) => {}
        },
    }

    if let Some(namespace) = node.lookup("namespace") {
        if let Err(diag) = expect_scalar(namespace, "namespace", "string") {
            diags.push(diag);
        }
    }

    if let Some(labels) = node.lookup("labels") {
        match expect_mapping(labels, "labels") {
            Err(diag) => diags.push(diag),
            Ok(mapping) => {
                for (_, value) in &mapping.entries {
                    if value.as_scalar().is_none() {
                        diags.push(Diagnostic::type_mismatch("labels", "string", value.line()));
                    }
                }
            }
        }
    }

    diags
}

/// Spec block: optional `os` from the fixed set, required `containers`
/// sequence.
fn validate_spec(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    if let Err(diag) = expect_mapping(node, "spec") {
        diags.push(diag);
        return diags;
    }

    if let Some(os) = node.lookup("os") {
        match expect_scalar(os, "os", "string") {
            Err(diag) => diags.push(diag),
            Ok(scalar) => diags.extend(match_set(scalar, "os", patterns::OS_VALUES)),
        }
    }

    match node.lookup("containers") {
        None => diags.push(Diagnostic::required("containers")),
        Some(containers) => diags.merge(validate_containers(containers)),
    }

    diags
}

/// Container list: per-container fields in schema order, plus name
/// uniqueness across siblings.
///
/// The "seen names" set is local to this single left-to-right pass and
/// discarded on return, so no state survives the call. A duplicate name is
/// reported with the same invalid-format diagnostic as a pattern failure,
/// attached to the later occurrence's line; the two cases are not
/// distinguishable from the message shape alone.
fn validate_containers(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    let list = match expect_sequence(node, "containers") {
        Ok(list) => list,
        Err(diag) => {
            diags.push(diag);
            return diags;
        }
    };

    let mut seen: HashSet<&str> = HashSet::new();

    for container in &list.items {
        if container.as_mapping().is_none() {
            diags.push(Diagnostic::type_mismatch("containers", "object", container.line()));
            continue;
        }

        match container.lookup("name") {
            None => diags.push(Diagnostic::required("name")),
            Some(name) => match expect_scalar(name, "name", "string") {
                Err(diag) => diags.push(diag),
                Ok(scalar) if scalar.value.is_empty() => {
                    diags.push(Diagnostic::required_at("name", scalar.line));
                }
                Ok(scalar) => {
                    diags.extend(match_pattern(scalar, "name", patterns::container_name()));
                    // A badly formatted name still claims its spot, so a
                    // later well-formed duplicate is flagged too.
                    if !seen.insert(scalar.value.as_str()) {
                        diags.push(Diagnostic::invalid_format("name", &scalar.value, scalar.line));
                    }
                }
            },
        }

        match container.lookup("image") {
            None => diags.push(Diagnostic::required("image")),
            Some(image) => match expect_scalar(image, "image", "string") {
                Err(diag) => diags.push(diag),
                Ok(scalar) => diags.extend(match_pattern(scalar, "image", patterns::image_ref())),
            },
        }

        if let Some(ports) = container.lookup("ports") {
            diags.merge(validate_ports(ports));
        }

        if let Some(probe) = container.lookup("readinessProbe") {
            diags.merge(validate_probe(probe));
        }

        if let Some(probe) = container.lookup("livenessProbe") {
            diags.merge(validate_probe(probe));
        }

        match container.lookup("resources") {
            None => diags.push(Diagnostic::required("resources")),
            Some(resources) => diags.merge(validate_resources(resources)),
        }
    }

    diags
}

/// Port list: required `containerPort` in 1..=65535, optional `protocol`
/// from the fixed set.
fn validate_ports(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    let list = match expect_sequence(node, "ports") {
        Ok(list) => list,
        Err(diag) => {
            diags.push(diag);
            return diags;
        }
    };

    for port in &list.items {
        if port.as_mapping().is_none() {
            diags.push(Diagnostic::type_mismatch("ports", "object", port.line()));
            continue;
        }

        match port.lookup("containerPort") {
            None => diags.push(Diagnostic::required("containerPort")),
            Some(value) => match expect_scalar(value, "containerPort", "int") {
                Err(diag) => diags.push(diag),
                Ok(scalar) => diags.extend(check_int_in_range(
                    scalar,
                    "containerPort",
                    patterns::PORT_MIN,
                    patterns::PORT_MAX,
                )),
            },
        }

        if let Some(protocol) = port.lookup("protocol") {
            match expect_scalar(protocol, "protocol", "string") {
                Err(diag) => diags.push(diag),
                Ok(scalar) => diags.extend(match_set(scalar, "protocol", patterns::PROTOCOLS)),
            }
        }
    }

    diags
}

/// Probe block: required `httpGet` object carrying a required absolute
/// `path` and a required `port` in 1..=65535.
fn validate_probe(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    if let Err(diag) = expect_mapping(node, "probe") {
        diags.push(diag);
        return diags;
    }

    let http_get = match node.lookup("httpGet") {
        None => {
            diags.push(Diagnostic::required("httpGet"));
            return diags;
        }
        Some(http_get) => http_get,
    };

    if let Err(diag) = expect_mapping(http_get, "httpGet") {
        diags.push(diag);
        return diags;
    }

    match http_get.lookup("path") {
        None => diags.push(Diagnostic::required("path")),
        Some(path) => match expect_scalar(path, "path", "string") {
            Err(diag) => diags.push(diag),
            Ok(scalar) => {
                if scalar.value.is_empty() || !scalar.value.starts_with('/') {
                    diags.push(Diagnostic::invalid_format("path", &scalar.value, scalar.line));
                }
            }
        },
    }

    match http_get.lookup("port") {
        None => diags.push(Diagnostic::required("port")),
        Some(port) => match expect_scalar(port, "port", "int") {
            Err(diag) => diags.push(diag),
            Ok(scalar) => diags.extend(check_int_in_range(
                scalar,
                "port",
                patterns::PORT_MIN,
                patterns::PORT_MAX,
            )),
        },
    }

    diags
}

/// Resources block: optional `limits` and `requests` resource maps.
fn validate_resources(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    if let Err(diag) = expect_mapping(node, "resources") {
        diags.push(diag);
        return diags;
    }

    if let Some(limits) = node.lookup("limits") {
        diags.merge(validate_resource_map(limits));
    }

    if let Some(requests) = node.lookup("requests") {
        diags.merge(validate_resource_map(requests));
    }

    diags
}

/// One resource map: `cpu` must be an unquoted integer literal, `memory`
/// a quantity string. Keys outside the recognized set pass through with
/// no diagnostic so unknown extension resources stay accepted.
fn validate_resource_map(node: &Node) -> Diagnostics {
    let mut diags = Diagnostics::new();

    let mapping = match expect_mapping(node, "resources") {
        Ok(mapping) => mapping,
        Err(diag) => {
            diags.push(diag);
            return diags;
        }
    };

    for (key, value) in &mapping.entries {
        match key.value.as_str() {
            "cpu" => {
                let is_int_literal =
                    matches!(value, Node::Scalar(scalar) if scalar.tag == ScalarTag::Int);
                if !is_int_literal {
                    diags.push(Diagnostic::type_mismatch("cpu", "int", value.line()));
                }
            }
            "memory" => match expect_scalar(value, "memory", "string") {
                Err(diag) => diags.push(diag),
                Ok(scalar) => {
                    diags.extend(match_pattern(scalar, "memory", patterns::memory_quantity()));
                }
            },
            _ => {}
        }
    }

    diags
}
