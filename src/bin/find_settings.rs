use settings_writer_lib::writer::SettingsWriter;

fn main() {
    match SettingsWriter::for_current_user() {
        Ok(writer) => {
            println!("Config dir: {:?}", writer.config_dir());
            println!("Settings file: {:?}", writer.settings_path());
            println!("Exists: {}", writer.settings_path().is_file());
        }
        Err(err) => println!("Could not determine settings path: {}", err),
    }
}
