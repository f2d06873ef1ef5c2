//! crates/kb_report/src/structure.rs
//! Map the parsed JSON tree onto `kb_core` entities.
//!
//! Unknown keys are ignored. Optional sequences (`Controls`, `tests`,
//! `results`) default to empty when absent or null. Every other displayed
//! field is mandatory, and a miss names the entity and its identifier so the
//! failing test can be found in a large report.

use serde_json::{Map, Value};

use kb_core::{CheckResult, Control, Counts, Document, Test};

use crate::ReportError;

/// Build the typed document from a loaded kube-bench tree.
pub fn build_document(root: &Value) -> Result<Document, ReportError> {
    let doc = root.as_object().ok_or_else(|| ReportError::InvalidField {
        entity: "document",
        id: "/".into(),
        field: "(root)",
        expected: "object",
    })?;
    let doc = Fields { entity: "document", id: "/".into(), obj: doc };

    let controls = doc
        .seq("Controls")?
        .iter()
        .enumerate()
        .map(|(i, v)| map_control(i, v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document { controls })
}

fn map_control(index: usize, v: &Value) -> Result<Control, ReportError> {
    let c = Fields::entry("control", "Controls", index, "id", v)?;
    let tests = c
        .seq("tests")?
        .iter()
        .enumerate()
        .map(|(i, t)| map_test(i, t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Control {
        id: c.text("id")?,
        text: c.text("text")?,
        node_type: c.text("node_type")?,
        tests,
    })
}

fn map_test(index: usize, v: &Value) -> Result<Test, ReportError> {
    let t = Fields::entry("test", "tests", index, "section", v)?;
    let counts = Counts {
        pass: t.count("pass")?,
        fail: t.count("fail")?,
        warn: t.count("warn")?,
        info: t.count("info")?,
    };
    let results = t
        .seq("results")?
        .iter()
        .enumerate()
        .map(|(i, r)| map_result(i, r))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Test {
        section: t.text("section")?,
        desc: t.text("desc")?,
        counts,
        results,
    })
}

fn map_result(index: usize, v: &Value) -> Result<CheckResult, ReportError> {
    let r = Fields::entry("result", "results", index, "test_number", v)?;
    Ok(CheckResult {
        test_number: r.text("test_number")?,
        test_desc: r.text("test_desc")?,
        status: r.text("status")?,
        reason: r.opt_text("reason")?,
        remediation: r.opt_text("remediation")?,
    })
}

// ---- Field access ----

/// One JSON object plus the label used in error messages.
struct Fields<'a> {
    entity: &'static str,
    id: String,
    obj: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap element `index` of the `list` sequence. The identifier comes from
    /// `id_key` when readable, otherwise it is positional (`#0`, `#1`, ...).
    fn entry(
        entity: &'static str,
        list: &'static str,
        index: usize,
        id_key: &str,
        v: &'a Value,
    ) -> Result<Self, ReportError> {
        let positional = format!("#{index}");
        let obj = v.as_object().ok_or_else(|| ReportError::InvalidField {
            entity,
            id: positional.clone(),
            field: list,
            expected: "object",
        })?;
        let id = obj.get(id_key).and_then(scalar_text).unwrap_or(positional);
        Ok(Self { entity, id, obj })
    }

    fn missing(&self, field: &'static str) -> ReportError {
        ReportError::MissingField { entity: self.entity, id: self.id.clone(), field }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> ReportError {
        ReportError::InvalidField { entity: self.entity, id: self.id.clone(), field, expected }
    }

    /// Mandatory display field: string or number.
    fn text(&self, field: &'static str) -> Result<String, ReportError> {
        let v = self.obj.get(field).ok_or_else(|| self.missing(field))?;
        scalar_text(v).ok_or_else(|| self.invalid(field, "string or number"))
    }

    /// Optional display field. Absent, null, and "" all read as `None`.
    fn opt_text(&self, field: &'static str) -> Result<Option<String>, ReportError> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => {
                let s = scalar_text(v).ok_or_else(|| self.invalid(field, "string or number"))?;
                Ok(Some(s).filter(|s| !s.is_empty()))
            }
        }
    }

    /// Mandatory scanner counter.
    fn count(&self, field: &'static str) -> Result<u64, ReportError> {
        self.obj
            .get(field)
            .ok_or_else(|| self.missing(field))?
            .as_u64()
            .ok_or_else(|| self.invalid(field, "non-negative integer"))
    }

    /// Optional sequence; absent or null is empty.
    fn seq(&self, field: &'static str) -> Result<&'a [Value], ReportError> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(field, "array")),
        }
    }
}

/// Display form of a scalar: strings verbatim, numbers in their JSON form.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
