mod oauth_token;
