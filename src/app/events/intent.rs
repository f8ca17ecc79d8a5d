use crate::app::state::ViewMode;
use crate::core::PointBuffer;
use glam::DVec2;
use std::time::Instant;

/// App-Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Positionen sind Canvas-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Startpunkte vorgegeben (Reset)
    ControlPointsReplaced { points: PointBuffer },
    /// Sitzung im gewählten Modus starten
    SessionStarted { mode: ViewMode, now: Instant },
    /// Primärtaste gedrückt
    PointerPressed { pos: DVec2 },
    /// Zeiger mit gedrückter Primärtaste bewegt
    PointerDragged { pos: DVec2 },
    /// Primärtaste losgelassen
    PointerReleased { pos: DVec2 },
    /// Sekundärklick (Punkt löschen)
    SecondaryClicked { pos: DVec2 },
    /// Host-Frame: fällige Timer prüfen
    TimerElapsed { now: Instant },
    /// Anwendung beenden
    ExitRequested,
}
