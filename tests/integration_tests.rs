//! Integration tests for quote calculation.
//!
//! These tests price a realistic two-material kitchen order from a JSON
//! fixture and check the pricing rules and rollup invariants end to end.

use panel_quote::config::float_cmp::approx_eq;
use panel_quote::{
    calculate_quote, flatten_rows, parse_quote_input, parse_quote_input_str, quote_from_file,
    render_summary, validate_input, CuttingFeeInfo, EdgeMaterialInfo, MaterialInfo,
    OptimizationResult, PanelEdge, PanelWithServices, Placement, PricingConfig, PricingMethod,
    QuoteError, QuoteInput, QuoteResult, QuoteWarning, RoundingPolicy,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Fixture directory for integration tests
const FIXTURE_DIR: &str = "tests/fixtures";

fn load_fixture(name: &str) -> QuoteInput {
    let path = Path::new(FIXTURE_DIR).join(name);
    parse_quote_input(&path).expect("Fixture should parse")
}

fn kitchen_quote() -> QuoteResult {
    load_fixture("kitchen.json").calculate(&PricingConfig::default())
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        approx_eq(actual, expected),
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

// ==================== Fixture pricing ====================

#[test]
fn test_kitchen_materials_priced_in_plan_order() {
    let quote = kitchen_quote();
    let ids: Vec<&str> = quote
        .materials
        .iter()
        .map(|m| m.material_id.as_str())
        .collect();
    assert_eq!(ids, vec!["10", "20"]);
    assert_eq!(quote.currency, "HUF");
}

#[test]
fn test_kitchen_stock_boards() {
    let quote = kitchen_quote();
    let stock = quote.material("10").expect("stock material priced");

    assert_eq!(stock.boards.len(), 2);

    let full = &stock.boards[0];
    assert_eq!(full.board_id, 1);
    assert_eq!(full.pricing_method, PricingMethod::FullBoard);
    assert_close(full.charged_area_m2, 5.796, "board 1 charged area");
    assert_close(full.net_price, 23_184.0, "board 1 net");

    let partial = &stock.boards[1];
    assert_eq!(partial.board_id, 2);
    assert_eq!(partial.pricing_method, PricingMethod::PanelArea);
    assert_close(partial.area_m2, 0.3, "board 2 used area");
    assert_close(partial.charged_area_m2, 0.36, "board 2 charged area");
    assert_close(partial.net_price, 1_440.0, "board 2 net");

    assert_close(stock.total_material_net, 24_624.0, "material net");
}

#[test]
fn test_kitchen_edges_cutting_services() {
    let quote = kitchen_quote();
    let stock = quote.material("10").expect("stock material priced");

    assert_eq!(stock.edge_materials.len(), 1);
    let edge = &stock.edge_materials[0];
    assert_eq!(edge.edge_material_name, "ABS 2mm");
    assert_eq!(edge.total_quantity, 4);
    assert_close(edge.length_with_overhang_m, 6.88, "edge length");
    assert_close(edge.net_price, 1_238.4, "edge net");

    let cutting = stock.cutting_cost.as_ref().expect("cutting priced");
    assert_close(cutting.total_cut_length_m, 12.0, "cut length");
    assert_close(cutting.net_price, 3_000.0, "cutting net");

    let services = stock
        .additional_services
        .as_ref()
        .expect("services priced");
    let drilling = services.drilling.as_ref().expect("drilling priced");
    assert_close(drilling.quantity, 8.0, "holes");
    assert_close(drilling.net_price, 480.0, "drilling net");
    assert!(services.doubling.is_none());
    let angle_cut = services.angle_cut.as_ref().expect("angle cut priced");
    assert_close(angle_cut.net_price, 700.0, "angle cut net");
    assert_close(stock.total_services_net, 1_180.0, "services net");

    assert_close(stock.total_net, 30_042.4, "material total net");
}

#[test]
fn test_kitchen_made_to_order_lot() {
    let quote = kitchen_quote();
    let lot = quote.material("20").expect("made to order material priced");

    assert_eq!(lot.boards.len(), 3);
    for board in &lot.boards {
        assert_eq!(board.pricing_method, PricingMethod::FullBoard);
        assert_close(board.net_price, 39_650.0, "board share");
        assert_close(board.charged_area_m2, 3.965, "board area");
    }
    let net: f64 = lot.boards.iter().map(|b| b.net_price).sum();
    assert_close(net, 118_950.0, "lot net");
    assert_close(lot.total_material_net, 118_950.0, "material net");

    assert!(lot.edge_materials.is_empty());
    assert!(lot.additional_services.is_none());
    assert_close(lot.total_cutting_net, 2_000.0, "cutting net");
}

#[test]
fn test_kitchen_warnings() {
    let quote = kitchen_quote();
    assert_eq!(
        quote.warnings,
        vec![
            QuoteWarning::EdgeMaterialNotFound {
                material_id: "10".to_string(),
                edge_material_name: "Unknown edge".to_string(),
            },
            QuoteWarning::MaterialNotFound {
                material_id: "99".to_string()
            },
        ]
    );
}

#[test]
fn test_kitchen_validation_passes_with_warnings() {
    let input = load_fixture("kitchen.json");
    let result = validate_input(&input).expect("Should validate");
    assert!(result.passed);
    assert!(result.warnings.iter().any(|w| w.contains("99")));
    assert!(result.warnings.iter().any(|w| w.contains("Unknown edge")));
}

// ==================== Rollup invariants ====================

#[test]
fn test_rollup_invariants() {
    let quote = kitchen_quote();

    for m in &quote.materials {
        assert_close(
            m.total_net,
            m.total_material_net + m.total_edge_net + m.total_cutting_net + m.total_services_net,
            "material net rollup",
        );
        assert_close(
            m.total_vat,
            m.total_material_vat + m.total_edge_vat + m.total_cutting_vat + m.total_services_vat,
            "material vat rollup",
        );
        assert_close(
            m.total_gross,
            m.total_material_gross
                + m.total_edge_gross
                + m.total_cutting_gross
                + m.total_services_gross,
            "material gross rollup",
        );
        assert_close(m.total_gross, m.total_net + m.total_vat, "net + vat");
    }

    let net: f64 = quote.materials.iter().map(|m| m.total_net).sum();
    let gross: f64 = quote.materials.iter().map(|m| m.total_gross).sum();
    assert_close(quote.grand_total_net, net, "grand net");
    assert_close(quote.grand_total_gross, gross, "grand gross");
    assert_close(quote.grand_total_net, 150_992.4, "grand net value");
}

#[test]
fn test_calculation_is_idempotent() {
    let input = load_fixture("kitchen.json");
    let config = PricingConfig::default();
    let first = input.calculate(&config);
    let second = input.calculate(&config);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_whole_net_rounding() {
    let input = load_fixture("kitchen.json");
    let quote = input.calculate(&PricingConfig::new(RoundingPolicy::WholeNet));
    let stock = quote.material("10").expect("stock material priced");
    assert_eq!(stock.edge_materials[0].net_price, 1_238.0);
    for m in &quote.materials {
        assert_eq!(m.total_material_net.fract(), 0.0);
        assert_eq!(m.total_cutting_net.fract(), 0.0);
    }
}

// ==================== Direct API ====================

fn stock_material(usage_limit: f64) -> MaterialInfo {
    MaterialInfo {
        id: "m".to_string(),
        name: "Board".to_string(),
        width_mm: 1000.0,
        length_mm: 1000.0,
        on_stock: true,
        usage_limit,
        price_per_sqm: 1000.0,
        vat_rate: 0.27,
        waste_multi: 1.5,
        currency: "HUF".to_string(),
    }
}

fn single_board_plan(w_mm: f64, h_mm: f64) -> OptimizationResult {
    OptimizationResult {
        material_id: "m".to_string(),
        placements: vec![Placement::new(1, w_mm, h_mm)],
        ..Default::default()
    }
}

fn price_single(material: MaterialInfo, plan: OptimizationResult) -> QuoteResult {
    calculate_quote(
        &[plan],
        &[material],
        &HashMap::new(),
        &HashMap::new(),
        None,
        None,
    )
}

#[test]
fn test_threshold_is_strictly_less_than() {
    let at_limit = price_single(stock_material(0.65), single_board_plan(650.0, 1000.0));
    assert_eq!(
        at_limit.materials[0].boards[0].pricing_method,
        PricingMethod::FullBoard
    );

    let below = price_single(stock_material(0.65), single_board_plan(649.99, 1000.0));
    assert_eq!(
        below.materials[0].boards[0].pricing_method,
        PricingMethod::PanelArea
    );
}

#[test]
fn test_waste_multiplier_on_one_square_metre() {
    let material = MaterialInfo {
        width_mm: 2000.0,
        length_mm: 3000.0,
        ..stock_material(0.65)
    };
    let quote = price_single(material, single_board_plan(1000.0, 1000.0));
    let board = &quote.materials[0].boards[0];
    assert_close(board.net_price, 1500.0, "net");
    assert_close(board.vat_amount, 405.0, "vat");
    assert_close(board.gross_price, 1905.0, "gross");
}

#[test]
fn test_edge_overhang_per_piece() {
    let mut edges = HashMap::new();
    edges.insert(
        "m".to_string(),
        vec![PanelEdge::new("ABS", 1000.0, 2), PanelEdge::new("ABS", 1000.0, 2)],
    );
    let mut edge_materials = HashMap::new();
    edge_materials.insert(
        "ABS".to_string(),
        EdgeMaterialInfo {
            name: "ABS".to_string(),
            price_per_m: 100.0,
            vat_rate: 0.27,
            overhang_mm: 10.0,
            currency: "HUF".to_string(),
        },
    );
    let quote = calculate_quote(
        &[single_board_plan(100.0, 100.0)],
        &[stock_material(0.65)],
        &edges,
        &edge_materials,
        None,
        None,
    );
    let edge = &quote.materials[0].edge_materials[0];
    assert_close(edge.total_length_m, 4.0, "length");
    assert_close(edge.length_with_overhang_m, 4.04, "length with overhang");
    assert_close(edge.net_price, 404.0, "net");
}

#[test]
fn test_doubling_null_when_not_requested() {
    let fee = CuttingFeeInfo {
        fee_per_meter: 100.0,
        drilling_fee_per_hole: 10.0,
        doubling_fee_per_sqm: 1000.0,
        angle_cut_fee_per_panel: 500.0,
        vat_rate: 0.27,
        currency: "HUF".to_string(),
    };
    let mut panels = HashMap::new();
    panels.insert(
        "m".to_string(),
        vec![PanelWithServices {
            drill_holes: 2,
            ..PanelWithServices::new(100.0, 100.0, 1)
        }],
    );
    let quote = calculate_quote(
        &[single_board_plan(100.0, 100.0)],
        &[stock_material(0.65)],
        &HashMap::new(),
        &HashMap::new(),
        Some(&fee),
        Some(&panels),
    );
    let json = serde_json::to_value(&quote).unwrap();
    let services = &json["materials"][0]["additional_services"];
    assert!(services["duplungolas"].is_null());
    assert!(services["szogvagas"].is_null());
    assert_eq!(services["panthelyfuras"]["quantity"].as_f64(), Some(2.0));
}

// ==================== File handling ====================

#[test]
fn test_quote_from_file() {
    let path = Path::new(FIXTURE_DIR).join("kitchen.json");
    let quote = quote_from_file(&path, &PricingConfig::default()).expect("Should price");
    assert_eq!(quote.materials.len(), 2);

    let summary = render_summary(&quote);
    assert!(summary.contains("[10] Egger W980 SM 18mm (stock)"));
    assert!(summary.contains("[20] HPL Compact 12mm (made to order)"));
    assert!(summary.contains("Grand total net:   150 992 Ft"));
}

#[test]
fn test_quote_from_file_rejects_invalid_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"materials": [{{"id": "m", "width_mm": 0, "length_mm": 1000}}]}}"#
    )
    .unwrap();
    let err = quote_from_file(file.path(), &PricingConfig::default()).unwrap_err();
    match err {
        QuoteError::InvalidValue { field, value, .. } => {
            assert_eq!(field, "input");
            assert!(!value.is_empty());
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = parse_quote_input(file.path()).unwrap_err();
    assert!(matches!(err, QuoteError::EmptyFile { .. }));
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_quote_input(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, QuoteError::FileNotFound { .. }));
    assert_eq!(err.code_value(), -1);
}

#[test]
fn test_parse_invalid_number() {
    let err = parse_quote_input_str(r#"{"materials": [{"id": "m", "price_per_sqm": "lots"}]}"#)
        .unwrap_err();
    match err {
        QuoteError::InvalidValue { field, value, .. } => {
            assert_eq!(field, "price_per_sqm");
            assert_eq!(value, "lots");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

// ==================== Persistence rows ====================

#[test]
fn test_flatten_kitchen_rows() {
    let rows = flatten_rows(&kitchen_quote());
    assert_eq!(rows.lines.len(), 2);
    assert_eq!(rows.boards.len(), 5);
    assert_eq!(rows.edges.len(), 1);
    // stock: cutting, drilling, angle cut; lot: cutting
    assert_eq!(rows.services.len(), 4);

    let line_total: f64 = rows.lines.iter().map(|l| l.total_net).sum();
    assert_close(line_total, 150_992.4, "rows net");
    assert_close(rows.edges[0].unit_net_price, 180.0, "edge unit price");
}
