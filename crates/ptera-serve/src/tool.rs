//! Line-delimited JSON-RPC tool transport.
//!
//! Exposes the simulation as a single named tool so external orchestration
//! can call it over stdio: one request object per line in, one response
//! object per line out. Notifications (requests without an id) receive no
//! response.

use std::io::{self, BufRead, Write};

use ptera_core::{RequestPayload, SimulationRequest};
use ptera_solver::Simulator;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::describe::SERVICE_NAME;

/// Name under which the simulation tool is registered.
pub const TOOL_NAME: &str = "pterasim.simulate";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;
const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// Serves the tool over stdin/stdout until EOF.
pub fn run(simulator: &Simulator) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serve_lines(simulator, stdin.lock(), &mut stdout)
}

/// Serves the tool over an arbitrary line-based transport.
pub fn serve_lines(
    simulator: &Simulator,
    reader: impl BufRead,
    writer: &mut impl Write,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(response) = handle_line(simulator, &line) {
            serde_json::to_writer(&mut *writer, &response)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn handle_line(simulator: &Simulator, line: &str) -> Option<Value> {
    let request: RpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            return Some(error_response(
                Value::Null,
                PARSE_ERROR,
                &err.to_string(),
                None,
            ))
        }
    };
    let id = request.id?;
    Some(match request.method.as_str() {
        "initialize" => result_response(
            id,
            json!({
                "serverInfo": {"name": SERVICE_NAME, "version": env!("CARGO_PKG_VERSION")},
                "capabilities": {"tools": {}},
            }),
        ),
        "tools/list" => result_response(id, json!({ "tools": [tool_descriptor()] })),
        "tools/call" => handle_call(simulator, id, &request.params),
        other => error_response(id, METHOD_NOT_FOUND, &format!("unknown method {other}"), None),
    })
}

fn handle_call(simulator: &Simulator, id: Value, params: &Value) -> Value {
    let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
    if name != TOOL_NAME {
        return error_response(id, INVALID_PARAMS, &format!("unknown tool {name}"), None);
    }
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
    let payload: RequestPayload = match serde_json::from_value(arguments) {
        Ok(payload) => payload,
        Err(err) => return error_response(id, INVALID_PARAMS, &err.to_string(), None),
    };
    let request = match SimulationRequest::new(payload) {
        Ok(request) => request,
        Err(err) => {
            let data = serde_json::to_value(&err).ok();
            return error_response(id, INVALID_PARAMS, &err.to_string(), data);
        }
    };
    let result = simulator.simulate(&request);
    match serde_json::to_string(&result) {
        Ok(text) => result_response(
            id,
            json!({
                "content": [{"type": "text", "text": text}],
                "structuredContent": result,
            }),
        ),
        Err(err) => error_response(id, INTERNAL_ERROR, &err.to_string(), None),
    }
}

fn tool_descriptor() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "Estimate thrust, lift and torque for a flapping wing. \
            Attempts the vortex-lattice solver when available, otherwise \
            falls back to the analytic surrogate. Supply wing geometry and \
            flapping schedule; returns forces and solver diagnostics.",
        "inputSchema": request_schema(),
    })
}

fn request_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "span_m": {"type": "number", "exclusiveMinimum": 0, "description": "Wing span in m"},
            "mean_chord_m": {"type": "number", "exclusiveMinimum": 0, "description": "Mean chord in m"},
            "stroke_frequency_hz": {"type": "number", "minimum": 0, "description": "Stroke frequency in Hz"},
            "stroke_amplitude_rad": {"type": "number", "minimum": 0, "description": "Stroke amplitude in rad"},
            "cruise_velocity_m_s": {"type": "number", "minimum": 0, "description": "Cruise velocity in m/s"},
            "air_density_kg_m3": {"type": "number", "exclusiveMinimum": 0, "description": "Air density in kg/m^3"},
            "cl_alpha_per_rad": {"type": "number", "description": "Lift-curve slope per rad"},
            "cd0": {"type": "number", "minimum": 0, "description": "Zero-lift drag coefficient"},
            "planform_area_m2": {"type": "number", "exclusiveMinimum": 0, "description": "Planform area in m^2"},
            "tail_moment_arm_m": {"type": "number", "minimum": 0, "description": "Tail moment arm in m; defaults to span/4"},
            "prefer_high_fidelity": {"type": "boolean", "description": "Attempt the vortex-lattice solver first", "default": true}
        },
        "required": [
            "span_m",
            "mean_chord_m",
            "stroke_frequency_hz",
            "stroke_amplitude_rad",
            "cruise_velocity_m_s",
            "air_density_kg_m3",
            "cl_alpha_per_rad",
            "cd0",
            "planform_area_m2"
        ],
        "additionalProperties": false
    })
}

fn result_response(id: Value, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

fn error_response(id: Value, code: i64, message: &str, data: Option<Value>) -> Value {
    let mut error = json!({"code": code, "message": message});
    if let Some(data) = data {
        error["data"] = data;
    }
    json!({"jsonrpc": "2.0", "id": id, "error": error})
}
