/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use dotenvy::dotenv;
    use flickr_shuffle::flickr::{Client, Credentials, Fetcher, PoolQuery};

    // Needs FLICKR_API_KEY and FLICKR_GROUP_ID, so disabled for ci/cd builds
    #[ignore]
    #[tokio::test]
    async fn pool_page_count() {
        dotenv().ok();
        let creds = Credentials::from_env().unwrap();
        let client = Client::new(&creds);
        let page = client
            .group_pool_page(&PoolQuery::count_only())
            .await
            .unwrap();
        println!("Pool info: {:?}", page);
        assert!(page.pages > 0);
        assert_eq!(page.photos.len(), 1);
    }

    #[ignore]
    #[tokio::test]
    async fn random_photo_is_downloaded() {
        dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
        let creds = Credentials::from_env().unwrap();
        let photo = Fetcher::new(&creds).fetch_random_photo().await.unwrap();
        println!("Photo: {:?}", photo);

        assert!(photo.resolved_url.starts_with("https://farm"));
        assert!(photo.metadata.owner_name.is_some());
        let (width, height) = photo.image.dimensions();
        assert!(width > 0 && height > 0);
    }

    #[ignore]
    #[tokio::test]
    async fn bad_key_is_rejected() {
        let creds = Credentials::new("not-a-key", "34427469792@N01").unwrap();
        let err = Fetcher::new(&creds).fetch_random_photo().await.unwrap_err();
        assert!(err.to_string().contains("Invalid API Key"));
    }
}
