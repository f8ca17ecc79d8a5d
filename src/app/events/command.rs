use crate::app::state::ViewMode;
use crate::core::PointBuffer;
use glam::DVec2;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkte ersetzen, Canvas anpassen, alle Visuals entfernen
    ReplaceControlPoints { points: PointBuffer },
    /// Anzeigemodus setzen
    SetViewMode { mode: ViewMode },
    /// Statische Anzeige komplett neu ableiten
    RefreshDisplay,
    /// Animation ab Ratio 0 starten
    StartAnimation { now: Instant },
    /// Einen Animations-Tick ausführen und den nächsten planen
    AdvanceAnimation { now: Instant },
    /// Laufende Animation abbrechen und ihre Visuals entfernen
    CancelAnimation,
    /// Play-Modus: leere Punktmenge, erster Refresh nach Startverzögerung
    StartPlayLoop { now: Instant },
    /// Play-Modus: nächsten Refresh planen
    SchedulePlayTick { now: Instant },
    /// Punkt greifen oder neuen Punkt anhängen
    GrabOrAddControlPoint { pos: DVec2 },
    /// Gegriffenen Punkt verschieben
    MoveGrabbedControlPoint { pos: DVec2 },
    /// Drag beenden
    ReleaseControlPoint,
    /// Getroffenen Punkt löschen
    RemoveControlPointAt { pos: DVec2 },
    /// Anwendung beenden
    RequestExit,
}
