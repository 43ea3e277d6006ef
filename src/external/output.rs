use chippy::{consts, DisplayBuffer};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const FOREGROUND: Color = Color::RGB(0, 255, 0);

fn cell_color(cell: u8) -> Result<Color, &'static str> {
    match cell {
        0 => Ok(BACKGROUND),
        1 => Ok(FOREGROUND),
        _ => Err("Invalid (non-binary) pixel value"),
    }
}

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
    scale: u32,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl, scale: u32) -> Result<Self, &'static str> {
        let video_subsystem = match context.video() {
            Ok(v) => v,
            Err(_) => return Err("Could not obtain video context"),
        };
        let window = match video_subsystem
            .window(
                "chippy",
                consts::CHIP8_WIDTH as u32 * scale,
                consts::CHIP8_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
        {
            Ok(w) => w,
            Err(_) => return Err("Could not create window"),
        };
        let mut canvas: Canvas<Window> = match window.into_canvas().present_vsync().build() {
            Ok(c) => c,
            Err(_) => return Err("Could not create canvas"),
        };

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver {
            screen: canvas,
            scale,
        })
    }

    pub fn draw(&mut self, display: &DisplayBuffer) -> Result<(), &'static str> {
        for (y, row) in display.buffer.iter().enumerate() {
            for (x, &col) in row.iter().enumerate() {
                let i = (x as u32) * self.scale;
                let j = (y as u32) * self.scale;

                self.screen.set_draw_color(cell_color(col)?);
                self.screen
                    .fill_rect(Rect::new(i as i32, j as i32, self.scale, self.scale))
                    .map_err(|_| "Could not draw pixel")?;
            }
        }
        self.screen.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color(0), Ok(BACKGROUND));
        assert_eq!(cell_color(1), Ok(FOREGROUND));
        assert_eq!(cell_color(2), Err("Invalid (non-binary) pixel value"));
    }

    #[test]
    #[ignore]
    // needs a video device
    fn test_draw_reports_success() -> Result<(), String> {
        let context = sdl2::init()?;
        let mut driver = DisplayDriver::new(&context, 1)?;
        let mut display = DisplayBuffer::default();
        display.buffer[0][0] = 1;
        driver.draw(&display)?;
        Ok(())
    }
}
