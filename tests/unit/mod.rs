mod test_routes;
