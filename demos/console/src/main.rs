use hd44780_emu::{
    CharacterRom, PixelState, HD44780, LCD_CMD_CLEAR, LCD_CMD_DISPLAY, LCD_CMD_DISPLAY_ON,
    LCD_CMD_HOME,
};

// dump the raster to stdout, no window needed
fn main() {
    let mut lcd = HD44780::new(16, 2, CharacterRom::A00).unwrap();

    lcd.send_command(LCD_CMD_CLEAR);
    lcd.send_command(LCD_CMD_HOME);
    lcd.send_command(LCD_CMD_DISPLAY | LCD_CMD_DISPLAY_ON);

    lcd.write_byte(b'H');
    lcd.write_byte(b'e');
    lcd.write_byte(b'l');
    lcd.write_byte(b'l');
    lcd.write_byte(b'o');
    lcd.write_string(" world!");

    for y in 0..lcd.num_pixels_y() {
        let mut line = String::new();
        for x in 0..lcd.num_pixels_x() {
            line.push(match lcd.pixel_state(x, y) {
                PixelState::None => ' ',
                PixelState::Off => '.',
                PixelState::On => '#',
            });
        }
        println!("{}", line);
    }
}
