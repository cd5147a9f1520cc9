// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : journal tracing + réglages TOML + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>, réglages par défaut
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG prioritaire ; sinon info pour ce crate.
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("calculatrice_pave=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .init();
}

/// Réglages depuis $CALC_REGLAGES si présent ; toute erreur => défauts (jamais fatal).
#[cfg(not(target_arch = "wasm32"))]
fn charger_reglages() -> noyau::Reglages {
    use noyau::reglages::VAR_REGLAGES;

    let Some(chemin) = std::env::var_os(VAR_REGLAGES) else {
        return noyau::Reglages::default();
    };

    match noyau::Reglages::charger(&chemin) {
        Ok(r) => {
            tracing::info!(chemin = %chemin.to_string_lossy(), "réglages chargés");
            r
        }
        Err(e) => {
            tracing::warn!(chemin = %chemin.to_string_lossy(), erreur = %e, "réglages ignorés");
            noyau::Reglages::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();
    let reglages = charger_reglages();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 620.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
