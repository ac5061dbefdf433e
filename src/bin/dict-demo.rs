use owned_dict::{BTreeDictionary, DictionaryHandle};
use std::io::{self, BufRead};
use std::process::exit;

fn main() {
    env_logger::init();

    let mut handle: DictionaryHandle<i32, String> =
        DictionaryHandle::new(BTreeDictionary::<i32, String>::new());
    let dict = match handle.get_obj() {
        Some(dict) => dict,
        None => {
            eprintln!("dictionary handle is empty");
            exit(1);
        }
    };

    // get with no data in the dictionary
    if let Err(e) = dict.get(&5) {
        println!("get: Key = {} is not found in my_dictionary", e.key());
    }

    dict.set(5, "wow".to_string());

    match dict.get(&5) {
        Ok(value) => println!("get: Key = 5, Value = {}", value),
        Err(e) => println!("get: Key = {} is not found in my_dictionary", e.key()),
    }

    println!(
        "is_set: Key 10 exists in the dictionary, it is - {}",
        dict.is_set(&10)
    );
    println!(
        "is_set: Key 5 exists in the dictionary, it is - {}",
        dict.is_set(&5)
    );

    // Pause until a line (or EOF) arrives; the result does not matter.
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
}
