use fountain_document::{api, Conf};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file> [conf.json]", args[0]);
        return;
    }

    let file_path = &args[1];

    let config = match args.get(2) {
        Some(conf_path) => match api::load_conf(conf_path).await {
            Ok(conf) => conf,
            Err(e) => {
                eprintln!("读取配置失败: {}", e);
                process::exit(1);
            }
        },
        None => Conf::default(),
    };

    let result = match api::parse_fountain_file(file_path, Some(config.clone())).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("读取文件失败: {}", e);
            process::exit(1);
        }
    };

    let doc = &result.document;
    println!("解析完成！");
    println!("标题: {}", doc.title);
    println!("解析时间: {}ms", result.parse_time);
    println!("Token数量: {}", result.token_count);
    println!("段落数量: {}", doc.body.len());
    println!("动作段落: {}", result.properties.action_paragraphs);
    println!("对白段落: {}", result.properties.dialogue_paragraphs);
    println!("角色数量: {}", result.properties.characters.len());

    let json_path = format!("{}.json", file_path);
    match api::to_json(&result, &config) {
        Ok(json) => match tokio::fs::write(&json_path, json).await {
            Ok(_) => println!("JSON输出已保存到: {}", json_path),
            Err(e) => eprintln!("写入JSON失败: {}", e),
        },
        Err(e) => eprintln!("序列化失败: {}", e),
    }
}
