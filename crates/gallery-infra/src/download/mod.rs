//! Local file downloads
//! 本地文件下载

mod http_file_downloader;

pub use http_file_downloader::HttpFileDownloader;
