use ratatui::layout::Rect;

use crate::types::PARALLAX_DAMPING;

/// Maximum number of cells a panel can be nudged in either axis.
const PARALLAX_MAX_SHIFT: i32 = 2;

/// Shift a panel rect a cell or two away from the terminal center, tracking
/// the mouse. The terminal rendition of the original's rotateX/rotateY panel
/// tilt: offset from center, damped, clamped, purely cosmetic.
pub fn parallax_rect(area: Rect, frame: Rect, mouse: Option<(u16, u16)>) -> Rect {
    let Some((mx, my)) = mouse else {
        return area;
    };
    let center_x = frame.x as i32 + frame.width as i32 / 2;
    let center_y = frame.y as i32 + frame.height as i32 / 2;

    let dx = ((center_x - mx as i32) / PARALLAX_DAMPING as i32)
        .clamp(-PARALLAX_MAX_SHIFT, PARALLAX_MAX_SHIFT);
    let dy = ((center_y - my as i32) / (PARALLAX_DAMPING as i32 / 2).max(1))
        .clamp(-PARALLAX_MAX_SHIFT, PARALLAX_MAX_SHIFT);

    let x = (area.x as i32 - dx).max(frame.x as i32) as u16;
    let y = (area.y as i32 - dy).max(frame.y as i32) as u16;
    let width = area.width.min(frame.width.saturating_sub(x - frame.x));
    let height = area.height.min(frame.height.saturating_sub(y - frame.y));
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Rect = Rect { x: 0, y: 0, width: 120, height: 40 };
    const PANEL: Rect = Rect { x: 30, y: 10, width: 60, height: 20 };

    #[test]
    fn no_mouse_means_no_shift() {
        assert_eq!(parallax_rect(PANEL, FRAME, None), PANEL);
    }

    #[test]
    fn centered_mouse_means_no_shift() {
        assert_eq!(parallax_rect(PANEL, FRAME, Some((60, 20))), PANEL);
    }

    #[test]
    fn shift_is_clamped_and_stays_inside_the_frame() {
        let shifted = parallax_rect(PANEL, FRAME, Some((0, 0)));
        assert!(shifted.x.abs_diff(PANEL.x) <= PARALLAX_MAX_SHIFT as u16);
        assert!(shifted.y.abs_diff(PANEL.y) <= PARALLAX_MAX_SHIFT as u16);
        assert!(shifted.x + shifted.width <= FRAME.width);
        assert!(shifted.y + shifted.height <= FRAME.height);
    }
}
