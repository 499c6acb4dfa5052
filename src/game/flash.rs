use crate::ui::{BrailleCanvas, Rgb};

const MAX_ALPHA: f32 = 255.0;

/// White screen flash played once after a crash
pub struct Flash {
    alpha: f32,
    flash_on: bool,
    speed: f32,
}

impl Flash {
    pub fn new(speed: f32) -> Self {
        Self {
            alpha: 0.0,
            flash_on: true,
            speed,
        }
    }

    /// Ramp up to full white, then fade back out and stay clear
    pub fn show(&mut self, dt: f32) {
        if self.flash_on {
            self.alpha += self.speed * dt;
            if self.alpha >= MAX_ALPHA {
                self.alpha = MAX_ALPHA;
                self.flash_on = false;
            }
        } else {
            self.alpha = (self.alpha - self.speed * dt).max(0.0);
        }
    }

    #[cfg(test)]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas) {
        if self.alpha > 0.0 {
            canvas.tint(Rgb::WHITE, self.alpha / MAX_ALPHA);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_ramps_up_then_down_once() {
        let mut flash = Flash::new(1500.0);
        assert_eq!(flash.alpha(), 0.0);

        flash.show(0.1);
        assert_eq!(flash.alpha(), 150.0);

        flash.show(0.1);
        assert_eq!(flash.alpha(), 255.0);

        flash.show(0.1);
        assert_eq!(flash.alpha(), 105.0);

        for _ in 0..10 {
            flash.show(0.1);
        }
        assert_eq!(flash.alpha(), 0.0);
    }

    #[test]
    fn test_draw_whitens_canvas() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.fill_background(Rgb(0, 0, 0));

        let mut flash = Flash::new(1500.0);
        flash.draw(&mut canvas);
        assert_eq!(canvas.cell_colors(0, 0).1, Rgb(0, 0, 0));

        flash.show(1.0);
        flash.draw(&mut canvas);
        assert_eq!(canvas.cell_colors(0, 0).1, Rgb::WHITE);
    }
}
