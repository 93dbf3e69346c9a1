use polytable_core::{row, stmt::RowStream, Error};

#[tokio::test]
async fn buffered_rows_are_yielded_in_order() {
    let rows = vec![row! { "id" => 1 }, row! { "id" => 2 }];
    let mut stream = RowStream::from_vec(rows);

    assert_eq!(stream.min_len(), 2);
    assert_eq!(stream.next().await.unwrap().unwrap(), row! { "id" => 1 });
    assert_eq!(stream.next().await.unwrap().unwrap(), row! { "id" => 2 });
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn collect_stops_at_first_error() {
    let items = vec![
        Ok(row! { "id" => 1 }),
        Err(polytable_core::err!("connection reset")),
        Ok(row! { "id" => 3 }),
    ];
    let stream = RowStream::from_iter(items.into_iter());

    let err: Error = stream.collect().await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
}

#[tokio::test]
async fn streamed_rows() {
    let stream = RowStream::from_stream(tokio_stream::iter(vec![
        Ok(row! { "id" => 1, "type" => "car" }),
        Ok(row! { "id" => 2, "type" => "bike" }),
    ]));

    let rows = stream.collect().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("type").unwrap().as_str(), Some("bike"));
}
